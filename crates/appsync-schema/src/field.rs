use indexmap::IndexMap;

use crate::{
    AppsyncFunction, CachingConfig, Code, DataSource, Directive, FunctionRuntime, GraphqlType, MappingTemplate,
};

/// A plain structural field: directives, a return type, and optionally named
/// arguments. Argument order is the declaration order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Field {
    pub directives: Vec<Directive>,
    pub return_type: GraphqlType,
    pub args: Option<IndexMap<String, GraphqlType>>,
}

/// A field whose value is produced by a resolver.
///
/// Exactly one of `data_source` and `pipeline_config` is populated: a unit
/// resolver is wired straight to its data source, while a pipeline resolver
/// delegates source selection to its functions.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ResolvableField {
    pub field: Field,
    pub data_source: Option<DataSource>,
    pub pipeline_config: Option<Vec<AppsyncFunction>>,
    pub max_batch_size: Option<u32>,
    pub caching_config: Option<CachingConfig>,
    /// Script flavor payload, together with `runtime`.
    pub code: Option<Code>,
    pub runtime: Option<FunctionRuntime>,
    /// Template flavor payloads.
    pub request_mapping_template: Option<MappingTemplate>,
    pub response_mapping_template: Option<MappingTemplate>,
}

/// One entry in a type's field map.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum SchemaField {
    Plain(Field),
    Resolvable(ResolvableField),
}

impl SchemaField {
    /// The structural part of the field, whichever flavor it is.
    pub fn field(&self) -> &Field {
        match self {
            SchemaField::Plain(field) => field,
            SchemaField::Resolvable(resolvable) => &resolvable.field,
        }
    }

    pub fn as_resolvable(&self) -> Option<&ResolvableField> {
        match self {
            SchemaField::Plain(_) => None,
            SchemaField::Resolvable(resolvable) => Some(resolvable),
        }
    }
}
