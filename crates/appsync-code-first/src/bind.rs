//! The schema binder: walks the registered root declarations depth-first,
//! builds every reachable intermediate type exactly once, and registers the
//! result with the schema container.

mod directives;
mod resolvable;
mod type_factories;

use std::{collections::HashMap, sync::Arc};

use appsync_schema::{AppsyncFunction, DataSource, Field, GraphqlType, IntermediateType, Schema, SchemaField};
use indexmap::IndexMap;

use crate::{
    descriptors::{DeclarationRef, TypeRef},
    error::BindError,
    ids::{DirectiveId, TypeKind},
    infos::{ArgInfo, ModifierInfo, TypeInfo},
    reflect,
};

pub use directives::DirectiveFactory;

/// Caller-resolved handles for resolver wiring, both keyed by the names used
/// in declarations. Defaults to empty maps.
#[derive(Debug, Default)]
pub struct BindOptions {
    pub data_sources: HashMap<String, DataSource>,
    pub functions: HashMap<String, AppsyncFunction>,
}

impl BindOptions {
    pub fn new() -> Self {
        BindOptions::default()
    }

    pub fn with_data_source(mut self, name: impl Into<String>, data_source: DataSource) -> Self {
        self.data_sources.insert(name.into(), data_source);
        self
    }

    pub fn with_function(mut self, name: impl Into<String>, function: AppsyncFunction) -> Self {
        self.functions.insert(name.into(), function);
        self
    }
}

/// Builds a [`Schema`] out of root declarations.
///
/// One binder instance runs one bind pass. The intermediate-type cache is
/// keyed by type name: two declarations sharing a display name silently
/// collapse into whichever was reached first, so names must be unique across
/// one pass. A declaration whose builder re-enters itself before its cache
/// entry exists (a type directly containing itself) recurses without bound;
/// that is a declaration error, not a handled failure.
pub struct SchemaBinder {
    schema: Schema,
    type_cache: IndexMap<String, Arc<IntermediateType>>,
    directive_factories: IndexMap<DirectiveId, DirectiveFactory>,
    query: Option<DeclarationRef>,
    mutation: Option<DeclarationRef>,
    subscription: Option<DeclarationRef>,
}

impl Default for SchemaBinder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaBinder {
    pub fn new() -> Self {
        Self::with_type_cache(IndexMap::new())
    }

    /// A binder with an injected intermediate-type cache. Pre-populated
    /// entries short-circuit building for their names.
    pub fn with_type_cache(type_cache: IndexMap<String, Arc<IntermediateType>>) -> Self {
        SchemaBinder {
            schema: Schema::new(),
            type_cache,
            directive_factories: directives::default_factories(),
            query: None,
            mutation: None,
            subscription: None,
        }
    }

    pub fn add_query(&mut self, query: DeclarationRef) {
        self.query = Some(query);
    }

    pub fn add_mutation(&mut self, mutation: DeclarationRef) {
        self.mutation = Some(mutation);
    }

    pub fn add_subscription(&mut self, subscription: DeclarationRef) {
        self.subscription = Some(subscription);
    }

    /// Register (or replace) the factory for a directive id.
    pub fn register_directive_factory(&mut self, directive_id: DirectiveId, factory: DirectiveFactory) {
        self.directive_factories.insert(directive_id, factory);
    }

    /// The schema built so far.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn into_schema(self) -> Schema {
        self.schema
    }

    /// Bind every registered root, in query, mutation, subscription order.
    ///
    /// The order is fixed purely for determinism. On error the pass aborts;
    /// the schema is only meaningful after an `Ok` return.
    pub fn bind_schema(&mut self, options: &BindOptions) -> Result<(), BindError> {
        let roots = [
            (TypeKind::Query, "Query", self.query),
            (TypeKind::Mutation, "Mutation", self.mutation),
            (TypeKind::Subscription, "Subscription", self.subscription),
        ];

        for (kind, name, declaration) in roots {
            let Some(declaration) = declaration else {
                continue;
            };

            tracing::debug!(root = name, "binding root type");

            let root_info = TypeInfo {
                kind,
                name: name.to_owned(),
                definition: TypeRef::Declaration(declaration),
            };

            let fields = self.create_fields(&root_info, options)?;

            for (field_name, field) in fields {
                match kind {
                    TypeKind::Query => self.schema.add_query(field_name, field),
                    TypeKind::Mutation => self.schema.add_mutation(field_name, field),
                    _ => self.schema.add_subscription(field_name, field),
                }
            }
        }

        Ok(())
    }

    /// Build the name-keyed field map of one type. Duplicate property names
    /// collapse last-write-wins; declaration order is otherwise preserved.
    fn create_fields(
        &mut self,
        type_info: &TypeInfo,
        options: &BindOptions,
    ) -> Result<IndexMap<String, SchemaField>, BindError> {
        let field_infos = reflect::field_infos(type_info)?;

        let mut fields = IndexMap::new();

        for field_info in field_infos {
            let property_info = &field_info.property_info;

            let directives = self.create_directives(type_info, Some(property_info))?;
            let return_type = self.create_type(&property_info.return_type_info, field_info.modifier_info, options)?;
            let args = self.create_args(&field_info.arg_infos, options)?;

            let field = Field {
                directives,
                return_type,
                args,
            };

            // A plain field unless a resolver is bound; an unresolved field
            // emitted as resolvable would produce an empty resolver downstream.
            let entry = match reflect::resolver_info(type_info, property_info) {
                Some(resolver_info) => SchemaField::Resolvable(self.create_resolvable_field(
                    type_info,
                    property_info,
                    field,
                    &resolver_info,
                    options,
                )?),
                None => SchemaField::Plain(field),
            };

            fields.insert(property_info.property_name.clone(), entry);
        }

        Ok(fields)
    }

    /// Build the argument map of one field; `None` when there are no
    /// arguments.
    fn create_args(
        &mut self,
        arg_infos: &[ArgInfo],
        options: &BindOptions,
    ) -> Result<Option<IndexMap<String, GraphqlType>>, BindError> {
        if arg_infos.is_empty() {
            return Ok(None);
        }

        let mut args = IndexMap::new();

        for arg_info in arg_infos {
            let arg_type = self.create_type(&arg_info.property_info.return_type_info, arg_info.modifier_info, options)?;
            args.insert(arg_info.property_info.property_name.clone(), arg_type);
        }

        Ok(Some(args))
    }

    /// Build the type of one field or argument position. Scalars become
    /// scalar-flavored types directly; everything else wraps its intermediate
    /// type.
    fn create_type(
        &mut self,
        type_info: &TypeInfo,
        modifier_info: ModifierInfo,
        options: &BindOptions,
    ) -> Result<GraphqlType, BindError> {
        if let TypeRef::Scalar(scalar) = type_info.definition {
            return Ok(GraphqlType::scalar(scalar.as_type(), modifier_info.as_options()));
        }

        let intermediate = self.create_intermediate_type(type_info, options)?;

        Ok(GraphqlType::intermediate(intermediate, modifier_info.as_options()))
    }

    /// Build-or-fetch one named intermediate type.
    ///
    /// The cache is consulted first, so a name already built (or injected) is
    /// never rebuilt and never re-registered with the schema. The cache insert
    /// happens after the kind builder returns; dependents discovered inside
    /// the builder are other names and resolve through their own cache slots.
    fn create_intermediate_type(
        &mut self,
        type_info: &TypeInfo,
        options: &BindOptions,
    ) -> Result<Arc<IntermediateType>, BindError> {
        if let Some(existing) = self.type_cache.get(&type_info.name) {
            return Ok(existing.clone());
        }

        let built = match type_info.kind {
            TypeKind::Enum => self.create_enum_type(type_info)?,
            TypeKind::Input => self.create_input_type(type_info, options)?,
            TypeKind::Interface => self.create_interface_type(type_info, options)?,
            TypeKind::Object => self.create_object_type(type_info, options)?,
            TypeKind::Union => self.create_union_type(type_info, options)?,
            type_kind => return Err(BindError::UnknownTypeKind { type_kind }),
        };

        let built = Arc::new(built);

        self.type_cache.insert(type_info.name.clone(), built.clone());

        tracing::debug!(type_name = %type_info.name, kind = %type_info.kind, "registered intermediate type");

        self.schema.add_type(built.clone());

        Ok(built)
    }
}
