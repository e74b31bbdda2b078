use std::fmt;

use crate::ids::TypeKind;

use super::{DirectiveDescriptor, FieldDescriptor, Scalar};

/// A type declaration: a marker type whose [`declare`](Declare::declare)
/// produces the descriptor for it.
///
/// References between declarations go through [`TypeRef::of`], which captures
/// the `declare` function without calling it — mutually recursive declarations
/// resolve lazily during binding.
pub trait Declare: 'static {
    fn declare() -> TypeDescriptor;
}

type DeclarationFn = fn() -> TypeDescriptor;

/// A lazy reference to a declaration: identity key and descriptor factory in
/// one.
#[derive(Clone, Copy)]
pub struct DeclarationRef {
    build: DeclarationFn,
}

impl DeclarationRef {
    pub fn of<T: Declare>() -> Self {
        DeclarationRef { build: T::declare }
    }

    pub fn from_fn(build: DeclarationFn) -> Self {
        DeclarationRef { build }
    }

    /// Build the descriptor. Called freshly on every reflection; descriptors
    /// are never cached between lookups.
    pub fn descriptor(&self) -> TypeDescriptor {
        (self.build)()
    }
}

impl PartialEq for DeclarationRef {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::fn_addr_eq(self.build, other.build)
    }
}

impl Eq for DeclarationRef {}

impl fmt::Debug for DeclarationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeclarationRef").finish_non_exhaustive()
    }
}

/// A value type position: either a built-in scalar marker or a reference to a
/// declared type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TypeRef {
    Scalar(Scalar),
    Declaration(DeclarationRef),
}

impl TypeRef {
    pub fn of<T: Declare>() -> Self {
        TypeRef::Declaration(DeclarationRef::of::<T>())
    }
}

impl From<Scalar> for TypeRef {
    fn from(scalar: Scalar) -> Self {
        TypeRef::Scalar(scalar)
    }
}

impl From<DeclarationRef> for TypeRef {
    fn from(declaration: DeclarationRef) -> Self {
        TypeRef::Declaration(declaration)
    }
}

/// The full declaration of one schema type: kind, display name, ordered fields,
/// associated declarations (implemented interfaces for objects, members for
/// unions) and type-level directives.
#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    kind: TypeKind,
    name: String,
    fields: Vec<FieldDescriptor>,
    associated_types: Vec<DeclarationRef>,
    directives: Vec<DirectiveDescriptor>,
}

impl TypeDescriptor {
    fn new<T>(kind: TypeKind) -> Self {
        TypeDescriptor {
            kind,
            name: short_type_name::<T>().to_owned(),
            fields: Vec::new(),
            associated_types: Vec::new(),
            directives: Vec::new(),
        }
    }

    /// An object type named after `T`.
    pub fn object<T>() -> Self {
        Self::new::<T>(TypeKind::Object)
    }

    /// An interface type named after `T`.
    pub fn interface<T>() -> Self {
        Self::new::<T>(TypeKind::Interface)
    }

    /// An input type named after `T`.
    pub fn input<T>() -> Self {
        Self::new::<T>(TypeKind::Input)
    }

    /// A union type named after `T`.
    pub fn union<T>() -> Self {
        Self::new::<T>(TypeKind::Union)
    }

    /// An enum type named after `T`.
    pub fn r#enum<T>() -> Self {
        Self::new::<T>(TypeKind::Enum)
    }

    /// Override the display name derived from the marker type.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Append a field. Declaration order is preserved.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Append an enum value. Only meaningful on enum kinds, where the value
    /// names are the whole definition.
    pub fn value(self, name: impl Into<String>) -> Self {
        self.field(FieldDescriptor::new(name, Scalar::String))
    }

    /// Record an implemented interface (object kind).
    pub fn implements<T: Declare>(mut self) -> Self {
        self.associated_types.push(DeclarationRef::of::<T>());
        self
    }

    /// Record a member type (union kind).
    pub fn member<T: Declare>(mut self) -> Self {
        self.associated_types.push(DeclarationRef::of::<T>());
        self
    }

    /// Append a type-level directive. Application order is preserved.
    pub fn directive(mut self, directive: DirectiveDescriptor) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn associated_types(&self) -> &[DeclarationRef] {
        &self.associated_types
    }

    pub fn directives(&self) -> &[DirectiveDescriptor] {
        &self.directives
    }
}

/// The last path segment of `T`'s type name. Declarations are expected to be
/// plain, non-generic marker types.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
