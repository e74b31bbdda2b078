//! Turns descriptors into the normalized metadata model.
//!
//! Lookups are two-level, matching where metadata is attached: type-level
//! (directives on the declaration, associated type lists) and property-level
//! (modifiers, argument bags, directives, resolver and cache settings on one
//! named field). Property-level lookups re-read the declaring type's
//! descriptor and select the last field matching the name, so a duplicated
//! name resolves to the same declaration the bound field map keeps.

use crate::{
    descriptors::{FieldDescriptor, FieldValue, Scalar, TypeRef},
    error::BindError,
    ids::TypeKind,
    infos::{ArgInfo, CacheInfo, DirectiveInfo, FieldInfo, ModifierInfo, PropertyInfo, ResolverInfo, TypeInfo},
};

/// Resolve the canonical [`TypeInfo`] of a scalar marker or declaration.
///
/// The `Intermediate` placeholder is a caller error: it exists for the schema
/// library's own bookkeeping and must never appear as a field type.
pub fn type_info(type_ref: TypeRef) -> Result<TypeInfo, BindError> {
    match type_ref {
        TypeRef::Scalar(Scalar::Intermediate) => Err(BindError::InvalidType {
            type_name: Scalar::Intermediate.to_string(),
        }),
        TypeRef::Scalar(scalar) => Ok(TypeInfo {
            kind: TypeKind::Scalar,
            name: scalar.to_string(),
            definition: type_ref,
        }),
        TypeRef::Declaration(declaration) => {
            let descriptor = declaration.descriptor();
            Ok(TypeInfo {
                kind: descriptor.kind(),
                name: descriptor.name().to_owned(),
                definition: type_ref,
            })
        }
    }
}

/// Enumerate a declared type's fields, in declaration order, one [`FieldInfo`]
/// per declared field.
pub fn field_infos(type_info: &TypeInfo) -> Result<Vec<FieldInfo>, BindError> {
    let Some(descriptor) = type_info.descriptor() else {
        return Ok(Vec::new());
    };

    descriptor
        .fields()
        .iter()
        .map(|field| {
            let (property_info, modifier_info) = reflect_property(type_info, field)?;
            let arg_infos = arg_infos(field)?;

            Ok(FieldInfo {
                property_info,
                modifier_info,
                arg_infos,
            })
        })
        .collect()
}

/// The declared associated types: implemented interfaces for an object,
/// members for a union. Empty when nothing is declared.
pub fn associated_type_infos(declaring: &TypeInfo) -> Result<Vec<TypeInfo>, BindError> {
    let Some(descriptor) = declaring.descriptor() else {
        return Ok(Vec::new());
    };

    descriptor
        .associated_types()
        .iter()
        .map(|declaration| type_info(TypeRef::Declaration(*declaration)))
        .collect()
}

/// The ordered directive list attached to the type, or to one of its
/// properties when `property_info` is given.
pub fn directive_infos(declaring: &TypeInfo, property_info: Option<&PropertyInfo>) -> Vec<DirectiveInfo> {
    let Some(descriptor) = declaring.descriptor() else {
        return Vec::new();
    };

    let directives = match property_info {
        Some(property) => descriptor
            .fields()
            .iter()
            .rev()
            .find(|field| field.name() == property.property_name)
            .map(|field| field.directives().to_vec())
            .unwrap_or_default(),
        None => descriptor.directives().to_vec(),
    };

    directives
        .into_iter()
        .map(|directive| DirectiveInfo {
            directive_id: directive.directive_id(),
            context: directive.context().cloned(),
        })
        .collect()
}

/// The resolver binding on a property, if any. A field without one is a plain
/// structural field.
pub fn resolver_info(declaring: &TypeInfo, property_info: &PropertyInfo) -> Option<ResolverInfo> {
    let descriptor = declaring.descriptor()?;

    descriptor
        .fields()
        .iter()
        .rev()
        .find(|field| field.name() == property_info.property_name)
        .and_then(|field| field.resolver_binding().cloned())
        .map(|binding| ResolverInfo {
            resolver: binding.resolver,
            functions: binding.functions,
        })
}

/// The caching settings on a property, if any. A zero TTL counts as unset.
pub fn cache_info(declaring: &TypeInfo, property_info: &PropertyInfo) -> Option<CacheInfo> {
    let descriptor = declaring.descriptor()?;

    descriptor
        .fields()
        .iter()
        .rev()
        .find(|field| field.name() == property_info.property_name)
        .and_then(|field| field.cache_settings().cloned())
        .filter(|settings| settings.ttl_seconds != 0)
        .map(|settings| CacheInfo {
            ttl_seconds: settings.ttl_seconds,
            keys: settings.keys,
        })
}

/// Shared property reflection for fields and arguments: resolve the value's
/// type, then compose the modifier flags. List-ness is implied by a list-shaped
/// value, an explicit list flag, or a required-list flag; required-list is
/// never implied.
fn reflect_property(declaring: &TypeInfo, field: &FieldDescriptor) -> Result<(PropertyInfo, ModifierInfo), BindError> {
    let (element, value_is_list) = match field.value() {
        FieldValue::Single(type_ref) => (type_ref, false),
        FieldValue::ListOf(element) => (element, true),
    };

    let return_type_info = type_info(element)?;

    let property_info = PropertyInfo {
        property_name: field.name().to_owned(),
        return_type_info,
        declaring_type_info: declaring.clone(),
    };

    let modifier_info = ModifierInfo {
        is_list: value_is_list || field.is_list_flag() || field.is_required_list_flag(),
        is_required: field.is_required_flag(),
        is_required_list: field.is_required_list_flag(),
    };

    Ok((property_info, modifier_info))
}

fn arg_infos(field: &FieldDescriptor) -> Result<Vec<ArgInfo>, BindError> {
    let Some(bag) = field.args_declaration() else {
        return Ok(Vec::new());
    };

    // Argument bags are reflected one level deep with the same per-property
    // algorithm as fields.
    let bag_info = type_info(TypeRef::Declaration(bag))?;
    let descriptor = bag.descriptor();

    descriptor
        .fields()
        .iter()
        .map(|arg| {
            let (property_info, modifier_info) = reflect_property(&bag_info, arg)?;

            Ok(ArgInfo {
                property_info,
                modifier_info,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptors::{Declare, DirectiveDescriptor, FieldDescriptor, TypeDescriptor};
    use pretty_assertions::assert_eq;

    struct Pagination;

    impl Declare for Pagination {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::input::<Pagination>()
                .field(FieldDescriptor::new("limit", Scalar::Int))
                .field(FieldDescriptor::new("cursor", Scalar::String))
        }
    }

    struct Post;

    impl Declare for Post {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Post>()
                .directive(DirectiveDescriptor::iam())
                .field(FieldDescriptor::new("id", Scalar::Id).required())
                .field(FieldDescriptor::new("tags", FieldValue::list_of(Scalar::String)).required_list())
                .field(
                    FieldDescriptor::new("related", TypeRef::of::<Post>())
                        .list()
                        .args::<Pagination>()
                        .directive(DirectiveDescriptor::api_key())
                        .directive(DirectiveDescriptor::cognito(["readers"])),
                )
        }
    }

    fn post_info() -> TypeInfo {
        type_info(TypeRef::of::<Post>()).unwrap()
    }

    #[test]
    fn scalar_type_info_uses_display_form() {
        let info = type_info(TypeRef::Scalar(Scalar::AwsJson)).unwrap();
        assert_eq!(info.kind, TypeKind::Scalar);
        assert_eq!(info.name, "AWSJSON");
    }

    #[test]
    fn intermediate_marker_is_rejected() {
        let err = type_info(TypeRef::Scalar(Scalar::Intermediate)).unwrap_err();
        assert_eq!(err.to_string(), "unable to map properties of type 'INTERMEDIATE'");
    }

    #[test]
    fn field_infos_come_back_in_declaration_order() {
        let fields = field_infos(&post_info()).unwrap();
        let names: Vec<&str> = fields
            .iter()
            .map(|field| field.property_info.property_name.as_str())
            .collect();
        assert_eq!(names, ["id", "tags", "related"]);
    }

    #[test]
    fn list_signals_compose() {
        let fields = field_infos(&post_info()).unwrap();

        // Plain required scalar: no list signal at all.
        assert_eq!(
            fields[0].modifier_info,
            ModifierInfo {
                is_list: false,
                is_required: true,
                is_required_list: false
            }
        );
        // List-shaped value plus required-list flag.
        assert_eq!(
            fields[1].modifier_info,
            ModifierInfo {
                is_list: true,
                is_required: false,
                is_required_list: true
            }
        );
        // Explicit list flag on a single-shaped value.
        assert!(fields[2].modifier_info.is_list);
        assert!(!fields[2].modifier_info.is_required_list);
    }

    #[test]
    fn required_list_alone_implies_list() {
        struct OnlyFlag;
        impl Declare for OnlyFlag {
            fn declare() -> TypeDescriptor {
                TypeDescriptor::object::<OnlyFlag>()
                    .field(FieldDescriptor::new("values", Scalar::Int).required_list())
            }
        }

        let info = type_info(TypeRef::of::<OnlyFlag>()).unwrap();
        let fields = field_infos(&info).unwrap();
        assert!(fields[0].modifier_info.is_list);
        assert!(fields[0].modifier_info.is_required_list);
    }

    #[test]
    fn argument_bags_reflect_one_level() {
        let fields = field_infos(&post_info()).unwrap();
        let related = &fields[2];

        let arg_names: Vec<&str> = related
            .arg_infos
            .iter()
            .map(|arg| arg.property_info.property_name.as_str())
            .collect();
        assert_eq!(arg_names, ["limit", "cursor"]);
        assert_eq!(related.arg_infos[0].property_info.declaring_type_info.name, "Pagination");
    }

    #[test]
    fn directive_order_is_preserved() {
        let info = post_info();
        let fields = field_infos(&info).unwrap();

        let type_level = directive_infos(&info, None);
        assert_eq!(type_level.len(), 1);

        let field_level = directive_infos(&info, Some(&fields[2].property_info));
        let ids: Vec<_> = field_level.iter().map(|d| d.directive_id).collect();
        assert_eq!(ids, [crate::ids::DirectiveId::API_KEY, crate::ids::DirectiveId::COGNITO]);
    }

    #[test]
    fn fields_without_attachments_have_none() {
        let info = post_info();
        let fields = field_infos(&info).unwrap();

        assert!(resolver_info(&info, &fields[0].property_info).is_none());
        assert!(cache_info(&info, &fields[0].property_info).is_none());
        assert!(directive_infos(&info, Some(&fields[0].property_info)).is_empty());
    }

    #[test]
    fn zero_ttl_cache_counts_as_unset() {
        struct Cached;
        impl Declare for Cached {
            fn declare() -> TypeDescriptor {
                TypeDescriptor::object::<Cached>()
                    .field(FieldDescriptor::new("hit", Scalar::Int).cache(60, ["sku"]))
                    .field(FieldDescriptor::new("miss", Scalar::Int).cache(0, ["sku"]))
            }
        }

        let info = type_info(TypeRef::of::<Cached>()).unwrap();
        let fields = field_infos(&info).unwrap();

        assert_eq!(
            cache_info(&info, &fields[0].property_info),
            Some(CacheInfo {
                ttl_seconds: 60,
                keys: vec!["sku".to_owned()]
            })
        );
        assert!(cache_info(&info, &fields[1].property_info).is_none());
    }
}
