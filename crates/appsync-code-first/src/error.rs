use crate::ids::{DirectiveId, TypeKind};

/// Failures surfaced by a bind pass.
///
/// All of these abort the pass at the point of detection; there is no partial
/// schema. The messages mirror the conditions a declaration author can actually
/// fix: an unannotatable placeholder type, an unregistered kind, or a name that
/// did not resolve against the caller-supplied maps.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// A scalar placeholder was used as a concrete field or argument type.
    #[error("unable to map properties of type '{type_name}'")]
    InvalidType { type_name: String },

    /// A directive id with no registered factory.
    #[error("unable to create directive of type '{directive_id}'")]
    UnknownDirective { directive_id: DirectiveId },

    /// A directive context bag missing the data its factory needs.
    #[error("invalid context for directive of type '{directive_id}'")]
    InvalidDirectiveContext { directive_id: DirectiveId },

    /// A type kind with no intermediate-type builder.
    #[error("unable to create type '{type_kind}'")]
    UnknownTypeKind { type_kind: TypeKind },

    /// A pipeline function name missing from the supplied function map.
    #[error("unable to find function '{function_name}'")]
    UnknownFunction { function_name: String },

    /// A unit resolver whose descriptor declares no data source.
    #[error("a data source is required for resolver '{resolver_name}'")]
    MissingDataSource { resolver_name: String },

    /// A data source name missing from the supplied data source map.
    #[error("unable to find data source '{data_source_name}'")]
    UnknownDataSource { data_source_name: String },
}
