//! In-memory constructs for an AppSync GraphQL API definition.
//!
//! This crate is the construction surface a code-first binding layer talks to:
//! a [`Schema`] container that accumulates root fields and named intermediate
//! types, plus the value types those registrations are made of — [`Field`] and
//! [`ResolvableField`], the intermediate type kinds, [`Directive`] statements,
//! and the data source / pipeline function handles a resolvable field is wired
//! with. Nothing here renders SDL or deploys anything; consumers hand the
//! finished [`Schema`] to whatever does.

mod directive;
mod field;
mod intermediate;
mod resolver;
mod schema;
mod types;

pub use directive::Directive;
pub use field::{Field, ResolvableField, SchemaField};
pub use intermediate::{EnumType, InputType, InterfaceType, IntermediateType, ObjectType, UnionType};
pub use resolver::{AppsyncFunction, CachingConfig, Code, DataSource, FunctionRuntime, MappingTemplate};
pub use schema::Schema;
pub use types::{GraphqlType, GraphqlTypeOptions, Type};
