use std::{path::PathBuf, time::Duration};

/// An opaque handle to a data source already attached to the API.
///
/// The binding layer never constructs these; the caller resolves them out of
/// band and passes them in by name.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DataSource {
    name: String,
}

impl DataSource {
    pub fn new(name: impl Into<String>) -> Self {
        DataSource { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An opaque handle to a deployed pipeline function.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AppsyncFunction {
    name: String,
}

impl AppsyncFunction {
    pub fn new(name: impl Into<String>) -> Self {
        AppsyncFunction { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Resolver code for script-runtime resolvers.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Code {
    Inline(String),
    Asset(PathBuf),
}

impl Code {
    pub fn from_inline(code: impl Into<String>) -> Self {
        Code::Inline(code.into())
    }

    pub fn from_asset(path: impl Into<PathBuf>) -> Self {
        Code::Asset(path.into())
    }
}

/// A request or response mapping template for template-runtime resolvers.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum MappingTemplate {
    Inline(String),
    File(PathBuf),
}

impl MappingTemplate {
    pub fn from_string(template: impl Into<String>) -> Self {
        MappingTemplate::Inline(template.into())
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        MappingTemplate::File(path.into())
    }
}

/// The script runtime tag attached alongside [`Code`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FunctionRuntime {
    pub name: &'static str,
    pub version: &'static str,
}

impl FunctionRuntime {
    pub const JS_1_0_0: FunctionRuntime = FunctionRuntime {
        name: "APPSYNC_JS",
        version: "1.0.0",
    };
}

/// Server-side caching configuration for one resolvable field.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CachingConfig {
    pub ttl: Duration,
    pub caching_keys: Vec<String>,
}
