use std::fmt;

/// The kind tag of a declared type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Scalar,
    Enum,
    Input,
    Interface,
    Object,
    Union,
    Query,
    Mutation,
    Subscription,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "scalar",
            TypeKind::Enum => "enum",
            TypeKind::Input => "input",
            TypeKind::Interface => "interface",
            TypeKind::Object => "object",
            TypeKind::Union => "union",
            TypeKind::Query => "query",
            TypeKind::Mutation => "mutation",
            TypeKind::Subscription => "subscription",
        }
    }

    /// Kinds that are registered with the schema as named intermediate types.
    pub fn is_intermediate(&self) -> bool {
        matches!(
            self,
            TypeKind::Enum | TypeKind::Input | TypeKind::Interface | TypeKind::Object | TypeKind::Union
        )
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies a directive kind in the binder's factory registry.
///
/// The built-in ids cover the AppSync authorization modes plus `@aws_subscribe`;
/// additional ids can be minted with [`DirectiveId::new`] and wired up through
/// `SchemaBinder::register_directive_factory`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirectiveId(&'static str);

impl DirectiveId {
    pub const API_KEY: DirectiveId = DirectiveId("api_key");
    pub const COGNITO: DirectiveId = DirectiveId("cognito");
    pub const CUSTOM: DirectiveId = DirectiveId("custom");
    pub const IAM: DirectiveId = DirectiveId("iam");
    pub const LAMBDA: DirectiveId = DirectiveId("lambda");
    pub const OIDC: DirectiveId = DirectiveId("oidc");
    pub const SUBSCRIBE: DirectiveId = DirectiveId("subscribe");

    pub const fn new(id: &'static str) -> Self {
        DirectiveId(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for DirectiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
