//! The five intermediate-type kind builders.

use appsync_schema::{EnumType, InputType, InterfaceType, IntermediateType, ObjectType, UnionType};

use crate::{error::BindError, infos::TypeInfo, reflect};

use super::{BindOptions, SchemaBinder};

impl SchemaBinder {
    /// An enum's definition is the list of its declared value names; any value
    /// content in the declaration is ignored.
    pub(crate) fn create_enum_type(&mut self, type_info: &TypeInfo) -> Result<IntermediateType, BindError> {
        let definition = reflect::field_infos(type_info)?
            .into_iter()
            .map(|field| field.property_info.property_name)
            .collect();

        Ok(IntermediateType::Enum(EnumType {
            name: type_info.name.clone(),
            definition,
        }))
    }

    pub(crate) fn create_input_type(
        &mut self,
        type_info: &TypeInfo,
        options: &BindOptions,
    ) -> Result<IntermediateType, BindError> {
        let directives = self.create_directives(type_info, None)?;
        let definition = self.create_fields(type_info, options)?;

        Ok(IntermediateType::Input(InputType {
            name: type_info.name.clone(),
            directives,
            definition,
        }))
    }

    pub(crate) fn create_interface_type(
        &mut self,
        type_info: &TypeInfo,
        options: &BindOptions,
    ) -> Result<IntermediateType, BindError> {
        let directives = self.create_directives(type_info, None)?;
        let definition = self.create_fields(type_info, options)?;

        Ok(IntermediateType::Interface(InterfaceType {
            name: type_info.name.clone(),
            directives,
            definition,
        }))
    }

    /// Objects additionally resolve their implemented interfaces into
    /// intermediate types; the list is `None` when nothing is implemented.
    pub(crate) fn create_object_type(
        &mut self,
        type_info: &TypeInfo,
        options: &BindOptions,
    ) -> Result<IntermediateType, BindError> {
        let directives = self.create_directives(type_info, None)?;
        let definition = self.create_fields(type_info, options)?;

        let interface_infos = reflect::associated_type_infos(type_info)?;

        let interface_types = if interface_infos.is_empty() {
            None
        } else {
            let mut interfaces = Vec::with_capacity(interface_infos.len());
            for interface_info in &interface_infos {
                interfaces.push(self.create_intermediate_type(interface_info, options)?);
            }
            Some(interfaces)
        };

        Ok(IntermediateType::Object(ObjectType {
            name: type_info.name.clone(),
            directives,
            definition,
            interface_types,
        }))
    }

    /// A union carries no fields of its own, only its member types, in
    /// declared order.
    pub(crate) fn create_union_type(
        &mut self,
        type_info: &TypeInfo,
        options: &BindOptions,
    ) -> Result<IntermediateType, BindError> {
        let member_infos = reflect::associated_type_infos(type_info)?;

        let mut definition = Vec::with_capacity(member_infos.len());
        for member_info in &member_infos {
            definition.push(self.create_intermediate_type(member_info, options)?);
        }

        Ok(IntermediateType::Union(UnionType {
            name: type_info.name.clone(),
            definition,
        }))
    }
}
