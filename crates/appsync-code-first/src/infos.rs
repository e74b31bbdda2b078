//! The normalized metadata model the binder consumes. Everything here is
//! computed freshly, on demand, per bind pass; nothing is cached or mutated in
//! place.

use appsync_schema::GraphqlTypeOptions;

use crate::{
    descriptors::{ResolverRef, TypeDescriptor, TypeRef},
    ids::{DirectiveId, TypeKind},
};

/// Identifies one declared type: kind tag, unique display name, and the lazy
/// reference used both as identity key and as descriptor factory.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeInfo {
    pub kind: TypeKind,
    pub name: String,
    pub definition: TypeRef,
}

impl TypeInfo {
    /// The descriptor behind a declared type; `None` for scalars.
    pub fn descriptor(&self) -> Option<TypeDescriptor> {
        match self.definition {
            TypeRef::Scalar(_) => None,
            TypeRef::Declaration(declaration) => Some(declaration.descriptor()),
        }
    }
}

/// One declared field or argument, with its resolved value type and a
/// back-reference to the owning type.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyInfo {
    pub property_name: String,
    pub return_type_info: TypeInfo,
    pub declaring_type_info: TypeInfo,
}

/// The three list/nullability signals, already composed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModifierInfo {
    pub is_list: bool,
    pub is_required: bool,
    pub is_required_list: bool,
}

impl ModifierInfo {
    pub fn as_options(&self) -> GraphqlTypeOptions {
        GraphqlTypeOptions {
            is_list: self.is_list,
            is_required: self.is_required,
            is_required_list: self.is_required_list,
        }
    }
}

/// One argument of a field's argument bag.
#[derive(Clone, Debug)]
pub struct ArgInfo {
    pub property_info: PropertyInfo,
    pub modifier_info: ModifierInfo,
}

/// One field of a type, with its arguments.
#[derive(Clone, Debug)]
pub struct FieldInfo {
    pub property_info: PropertyInfo,
    pub modifier_info: ModifierInfo,
    pub arg_infos: Vec<ArgInfo>,
}

/// A directive application: id plus the open context bag whose shape depends
/// on the id.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveInfo {
    pub directive_id: DirectiveId,
    pub context: Option<serde_json::Value>,
}

/// A resolver binding read off a field.
#[derive(Clone, Debug)]
pub struct ResolverInfo {
    pub resolver: ResolverRef,
    pub functions: Vec<String>,
}

/// Caching configuration read off a field.
#[derive(Clone, Debug, PartialEq)]
pub struct CacheInfo {
    pub ttl_seconds: u64,
    pub keys: Vec<String>,
}
