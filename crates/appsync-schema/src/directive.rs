use itertools::Itertools;

/// An AppSync authorization or behavior directive attached to a type or field.
///
/// Directives are carried as their rendered statement, the same way the AppSync
/// API accepts them.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Directive {
    statement: String,
}

impl Directive {
    /// `@aws_api_key`
    pub fn api_key() -> Self {
        Self::custom("@aws_api_key")
    }

    /// `@aws_iam`
    pub fn iam() -> Self {
        Self::custom("@aws_iam")
    }

    /// `@aws_oidc`
    pub fn oidc() -> Self {
        Self::custom("@aws_oidc")
    }

    /// `@aws_cognito_user_pools(cognito_groups: [...])`
    pub fn cognito<I>(groups: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::custom(format!(
            "@aws_cognito_user_pools(cognito_groups: [{}])",
            groups.into_iter().map(|group| format!("\"{}\"", group.as_ref())).join(", ")
        ))
    }

    /// `@aws_subscribe(mutations: [...])`
    pub fn subscribe<I>(mutations: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::custom(format!(
            "@aws_subscribe(mutations: [{}])",
            mutations
                .into_iter()
                .map(|mutation| format!("\"{}\"", mutation.as_ref()))
                .join(", ")
        ))
    }

    /// A directive with a caller-provided statement.
    pub fn custom(statement: impl Into<String>) -> Self {
        Directive {
            statement: statement.into(),
        }
    }

    /// The rendered directive statement.
    pub fn statement(&self) -> &str {
        &self.statement
    }
}
