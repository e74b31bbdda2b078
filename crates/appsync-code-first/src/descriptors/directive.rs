use serde_json::json;

use crate::ids::DirectiveId;

/// A directive as applied at a declaration site: an id plus whatever context
/// payload that directive kind carries. Directives without extra data carry no
/// context at all.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDescriptor {
    pub(crate) directive_id: DirectiveId,
    pub(crate) context: Option<serde_json::Value>,
}

impl DirectiveDescriptor {
    /// A directive under a caller-minted id, with an optional context payload.
    pub fn new(directive_id: DirectiveId, context: Option<serde_json::Value>) -> Self {
        DirectiveDescriptor { directive_id, context }
    }

    pub fn api_key() -> Self {
        Self::new(DirectiveId::API_KEY, None)
    }

    pub fn iam() -> Self {
        Self::new(DirectiveId::IAM, None)
    }

    pub fn oidc() -> Self {
        Self::new(DirectiveId::OIDC, None)
    }

    pub fn lambda() -> Self {
        Self::new(DirectiveId::LAMBDA, None)
    }

    pub fn cognito<I>(groups: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let groups: Vec<String> = groups.into_iter().map(Into::into).collect();
        Self::new(DirectiveId::COGNITO, Some(json!({ "groups": groups })))
    }

    pub fn custom(statement: impl Into<String>) -> Self {
        Self::new(DirectiveId::CUSTOM, Some(json!({ "statement": statement.into() })))
    }

    pub fn subscribe<I>(mutations: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mutations: Vec<String> = mutations.into_iter().map(Into::into).collect();
        Self::new(DirectiveId::SUBSCRIBE, Some(json!({ "mutations": mutations })))
    }

    pub fn directive_id(&self) -> DirectiveId {
        self.directive_id
    }

    pub fn context(&self) -> Option<&serde_json::Value> {
        self.context.as_ref()
    }
}
