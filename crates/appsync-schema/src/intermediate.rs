use std::sync::Arc;

use indexmap::IndexMap;

use crate::{Directive, SchemaField};

/// An enum type. Values are bare names; there is no further structure.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EnumType {
    pub name: String,
    pub definition: Vec<String>,
}

/// An input object type.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InputType {
    pub name: String,
    pub directives: Vec<Directive>,
    pub definition: IndexMap<String, SchemaField>,
}

/// An interface type.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InterfaceType {
    pub name: String,
    pub directives: Vec<Directive>,
    pub definition: IndexMap<String, SchemaField>,
}

/// An object type, optionally implementing interfaces.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ObjectType {
    pub name: String,
    pub directives: Vec<Directive>,
    pub definition: IndexMap<String, SchemaField>,
    /// `None` rather than an empty list when the object implements nothing.
    pub interface_types: Option<Vec<Arc<IntermediateType>>>,
}

/// A union type. Members are registered intermediate types, in declared order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct UnionType {
    pub name: String,
    pub definition: Vec<Arc<IntermediateType>>,
}

/// Any named, non-scalar type registered with the schema exactly once.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum IntermediateType {
    Enum(EnumType),
    Input(InputType),
    Interface(InterfaceType),
    Object(ObjectType),
    Union(UnionType),
}

impl IntermediateType {
    /// The unique display name the type is registered under.
    pub fn name(&self) -> &str {
        match self {
            IntermediateType::Enum(inner) => &inner.name,
            IntermediateType::Input(inner) => &inner.name,
            IntermediateType::Interface(inner) => &inner.name,
            IntermediateType::Object(inner) => &inner.name,
            IntermediateType::Union(inner) => &inner.name,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            IntermediateType::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            IntermediateType::Enum(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        match self {
            IntermediateType::Union(inner) => Some(inner),
            _ => None,
        }
    }
}
