use std::sync::Arc;

use indexmap::IndexMap;

use crate::{IntermediateType, SchemaField};

/// The accumulating API definition.
///
/// Root fields are added one by one under their operation kind; intermediate
/// types are appended in registration order. The container does no
/// deduplication of its own — callers are expected to register each named type
/// exactly once.
#[derive(Debug, Default, serde::Serialize)]
pub struct Schema {
    query_fields: IndexMap<String, SchemaField>,
    mutation_fields: IndexMap<String, SchemaField>,
    subscription_fields: IndexMap<String, SchemaField>,
    types: Vec<Arc<IntermediateType>>,
}

impl Schema {
    pub fn new() -> Self {
        Schema::default()
    }

    pub fn add_query(&mut self, name: impl Into<String>, field: SchemaField) {
        self.query_fields.insert(name.into(), field);
    }

    pub fn add_mutation(&mut self, name: impl Into<String>, field: SchemaField) {
        self.mutation_fields.insert(name.into(), field);
    }

    pub fn add_subscription(&mut self, name: impl Into<String>, field: SchemaField) {
        self.subscription_fields.insert(name.into(), field);
    }

    /// Register a named intermediate type.
    pub fn add_type(&mut self, intermediate_type: Arc<IntermediateType>) {
        self.types.push(intermediate_type);
    }

    pub fn query_fields(&self) -> &IndexMap<String, SchemaField> {
        &self.query_fields
    }

    pub fn mutation_fields(&self) -> &IndexMap<String, SchemaField> {
        &self.mutation_fields
    }

    pub fn subscription_fields(&self) -> &IndexMap<String, SchemaField> {
        &self.subscription_fields
    }

    /// All registered intermediate types, in registration order.
    pub fn types(&self) -> &[Arc<IntermediateType>] {
        &self.types
    }

    /// Find a registered type by name.
    pub fn get_type(&self, name: &str) -> Option<&Arc<IntermediateType>> {
        self.types.iter().find(|ty| ty.name() == name)
    }
}
