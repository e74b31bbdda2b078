use super::{Declare, DeclarationRef, DirectiveDescriptor, ResolverRef, Scalar, TypeRef};

/// The declared value of a field or argument: a single type reference, or a
/// list of one. List-ness composes with the explicit modifier flags during
/// reflection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue {
    Single(TypeRef),
    ListOf(TypeRef),
}

impl FieldValue {
    pub fn list_of(element: impl Into<TypeRef>) -> Self {
        FieldValue::ListOf(element.into())
    }
}

impl From<TypeRef> for FieldValue {
    fn from(value: TypeRef) -> Self {
        FieldValue::Single(value)
    }
}

impl From<Scalar> for FieldValue {
    fn from(scalar: Scalar) -> Self {
        FieldValue::Single(TypeRef::Scalar(scalar))
    }
}

impl From<DeclarationRef> for FieldValue {
    fn from(declaration: DeclarationRef) -> Self {
        FieldValue::Single(TypeRef::Declaration(declaration))
    }
}

/// A resolver bound to a field: the resolver declaration plus the ordered
/// pipeline function names (empty for a unit resolver).
#[derive(Clone, Debug)]
pub struct ResolverBinding {
    pub(crate) resolver: ResolverRef,
    pub(crate) functions: Vec<String>,
}

/// Server-side caching settings for a resolvable field. A zero TTL counts as
/// unset.
#[derive(Clone, Debug, PartialEq)]
pub struct CacheSettings {
    pub(crate) ttl_seconds: u64,
    pub(crate) keys: Vec<String>,
}

/// One declared field (or argument-bag member): name, value type, modifier
/// flags, and the optional attachments — argument bag, directives, resolver
/// binding, caching.
#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    name: String,
    value: FieldValue,
    list: bool,
    required: bool,
    required_list: bool,
    args: Option<DeclarationRef>,
    directives: Vec<DirectiveDescriptor>,
    resolver: Option<ResolverBinding>,
    cache: Option<CacheSettings>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        FieldDescriptor {
            name: name.into(),
            value: value.into(),
            list: false,
            required: false,
            required_list: false,
            args: None,
            directives: Vec::new(),
            resolver: None,
            cache: None,
        }
    }

    /// Mark the field as a list, independent of the declared value shape.
    pub fn list(mut self) -> Self {
        self.list = true;
        self
    }

    /// Mark the field as non-nullable.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the field as a non-nullable list. Implies list-ness.
    pub fn required_list(mut self) -> Self {
        self.required_list = true;
        self
    }

    /// Attach an argument bag declaration. Argument bags are reflected one
    /// level deep; they do not nest.
    pub fn args<T: Declare>(mut self) -> Self {
        self.args = Some(DeclarationRef::of::<T>());
        self
    }

    /// Append a directive. Application order is preserved.
    pub fn directive(mut self, directive: DirectiveDescriptor) -> Self {
        self.directives.push(directive);
        self
    }

    /// Bind a unit resolver to this field.
    pub fn resolve_with(mut self, resolver: ResolverRef) -> Self {
        self.resolver = Some(ResolverBinding {
            resolver,
            functions: Vec::new(),
        });
        self
    }

    /// Bind a pipeline resolver: the named functions run in order.
    pub fn resolve_through<I>(mut self, resolver: ResolverRef, functions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.resolver = Some(ResolverBinding {
            resolver,
            functions: functions.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Cache resolved values for `ttl_seconds`, keyed by the given caching
    /// keys.
    pub fn cache<I>(mut self, ttl_seconds: u64, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.cache = Some(CacheSettings {
            ttl_seconds,
            keys: keys.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> FieldValue {
        self.value
    }

    pub fn is_list_flag(&self) -> bool {
        self.list
    }

    pub fn is_required_flag(&self) -> bool {
        self.required
    }

    pub fn is_required_list_flag(&self) -> bool {
        self.required_list
    }

    pub fn args_declaration(&self) -> Option<DeclarationRef> {
        self.args
    }

    pub fn directives(&self) -> &[DirectiveDescriptor] {
        &self.directives
    }

    pub(crate) fn resolver_binding(&self) -> Option<&ResolverBinding> {
        self.resolver.as_ref()
    }

    pub(crate) fn cache_settings(&self) -> Option<&CacheSettings> {
        self.cache.as_ref()
    }
}
