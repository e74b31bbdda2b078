use std::fmt;

use appsync_schema::{Code, MappingTemplate};

/// The execution flavor of a resolver, with its flavor-specific payload.
#[derive(Clone, Debug)]
pub enum ResolverRuntime {
    /// Script runtime: the code ships with the fixed `APPSYNC_JS` runtime tag.
    Js { code: Code },
    /// Template runtime: request and response mapping templates.
    Vtl {
        request_mapping_template: MappingTemplate,
        response_mapping_template: MappingTemplate,
    },
}

/// Describes how one resolvable field executes: runtime flavor, the data
/// source it reads from (required unless the field binds pipeline functions),
/// and an optional batch size.
#[derive(Clone, Debug)]
pub struct ResolverDescriptor {
    pub(crate) name: String,
    pub(crate) data_source: Option<String>,
    pub(crate) max_batch_size: Option<u32>,
    pub(crate) runtime: ResolverRuntime,
}

impl ResolverDescriptor {
    /// A script-flavor resolver.
    pub fn js(name: impl Into<String>, code: Code) -> Self {
        ResolverDescriptor {
            name: name.into(),
            data_source: None,
            max_batch_size: None,
            runtime: ResolverRuntime::Js { code },
        }
    }

    /// A template-flavor resolver.
    pub fn vtl(name: impl Into<String>, request: MappingTemplate, response: MappingTemplate) -> Self {
        ResolverDescriptor {
            name: name.into(),
            data_source: None,
            max_batch_size: None,
            runtime: ResolverRuntime::Vtl {
                request_mapping_template: request,
                response_mapping_template: response,
            },
        }
    }

    /// Name the data source the resolver reads from.
    pub fn data_source(mut self, name: impl Into<String>) -> Self {
        self.data_source = Some(name.into());
        self
    }

    pub fn max_batch_size(mut self, size: u32) -> Self {
        self.max_batch_size = Some(size);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn runtime(&self) -> &ResolverRuntime {
        &self.runtime
    }
}

type ResolverFn = fn() -> ResolverDescriptor;

/// A lazy reference to a resolver declaration, mirroring how fields reference
/// type declarations.
#[derive(Clone, Copy)]
pub struct ResolverRef {
    build: ResolverFn,
}

impl ResolverRef {
    pub fn of(build: ResolverFn) -> Self {
        ResolverRef { build }
    }

    pub fn descriptor(&self) -> ResolverDescriptor {
        (self.build)()
    }
}

impl fmt::Debug for ResolverRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverRef").finish_non_exhaustive()
    }
}
