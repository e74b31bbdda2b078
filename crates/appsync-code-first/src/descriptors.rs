//! The declarative layer: plain descriptor values that play the role the
//! decorator metadata plays in a class-based schema definition. A declaration
//! is a marker type implementing [`Declare`]; its descriptor lists the fields,
//! modifiers, directives and resolver bindings explicitly, so nothing is
//! recovered by runtime introspection.

mod directive;
mod field;
mod resolver;
mod scalar;
mod type_descriptor;

pub use directive::DirectiveDescriptor;
pub use field::{CacheSettings, FieldDescriptor, FieldValue, ResolverBinding};
pub use resolver::{ResolverDescriptor, ResolverRef, ResolverRuntime};
pub use scalar::Scalar;
pub use type_descriptor::{Declare, DeclarationRef, TypeDescriptor, TypeRef};
