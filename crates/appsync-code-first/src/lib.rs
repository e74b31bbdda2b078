//! Code-first AppSync schema definition.
//!
//! Declare GraphQL types as plain marker types with explicit descriptors,
//! then bind them into an [`appsync_schema::Schema`]:
//!
//! ```
//! use appsync_code_first::{
//!     BindOptions, Declare, DeclarationRef, FieldDescriptor, Scalar, SchemaBinder, TypeDescriptor,
//! };
//!
//! struct Beer;
//!
//! impl Declare for Beer {
//!     fn declare() -> TypeDescriptor {
//!         TypeDescriptor::object::<Beer>()
//!             .field(FieldDescriptor::new("sku", Scalar::Id).required())
//!             .field(FieldDescriptor::new("name", Scalar::String))
//!     }
//! }
//!
//! struct Query;
//!
//! impl Declare for Query {
//!     fn declare() -> TypeDescriptor {
//!         TypeDescriptor::object::<Query>()
//!             .field(FieldDescriptor::new("beer", appsync_code_first::TypeRef::of::<Beer>()))
//!     }
//! }
//!
//! let mut binder = SchemaBinder::new();
//! binder.add_query(DeclarationRef::of::<Query>());
//! binder.bind_schema(&BindOptions::default()).unwrap();
//!
//! assert_eq!(binder.schema().types().len(), 1);
//! ```
//!
//! The pipeline has three stages: descriptors (the declarative layer),
//! [`reflect`] (descriptor to metadata model), and [`SchemaBinder`] (metadata
//! model to schema constructs, with per-name deduplication of intermediate
//! types).

mod bind;
mod descriptors;
mod error;
mod ids;
mod infos;

pub mod reflect;

pub use appsync_schema as schema;

pub use bind::{BindOptions, DirectiveFactory, SchemaBinder};
pub use descriptors::{
    CacheSettings, Declare, DeclarationRef, DirectiveDescriptor, FieldDescriptor, FieldValue, ResolverBinding,
    ResolverDescriptor, ResolverRef, ResolverRuntime, Scalar, TypeDescriptor, TypeRef,
};
pub use error::BindError;
pub use ids::{DirectiveId, TypeKind};
pub use infos::{ArgInfo, CacheInfo, DirectiveInfo, FieldInfo, ModifierInfo, PropertyInfo, ResolverInfo, TypeInfo};
