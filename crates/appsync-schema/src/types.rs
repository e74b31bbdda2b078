use std::{fmt, sync::Arc};

use crate::IntermediateType;

/// The GraphQL rendering of a type: one of the AppSync scalars, or the
/// `Intermediate` placeholder standing in for a named type carried alongside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Type {
    Id,
    String,
    Int,
    Float,
    Boolean,
    AwsDate,
    AwsTime,
    AwsDateTime,
    AwsTimestamp,
    AwsEmail,
    AwsJson,
    AwsUrl,
    AwsPhone,
    AwsIpAddress,
    /// Placeholder for enum, input, interface, object and union types. A
    /// [`GraphqlType`] with this base must carry the intermediate type itself.
    Intermediate,
}

impl Type {
    /// The name of the type as it appears in a GraphQL document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Id => "ID",
            Type::String => "String",
            Type::Int => "Int",
            Type::Float => "Float",
            Type::Boolean => "Boolean",
            Type::AwsDate => "AWSDate",
            Type::AwsTime => "AWSTime",
            Type::AwsDateTime => "AWSDateTime",
            Type::AwsTimestamp => "AWSTimestamp",
            Type::AwsEmail => "AWSEmail",
            Type::AwsJson => "AWSJSON",
            Type::AwsUrl => "AWSURL",
            Type::AwsPhone => "AWSPhone",
            Type::AwsIpAddress => "AWSIPAddress",
            Type::Intermediate => "INTERMEDIATE",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// List and nullability modifiers for a [`GraphqlType`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct GraphqlTypeOptions {
    /// `[T]`
    pub is_list: bool,
    /// `T!`
    pub is_required: bool,
    /// `[T]!`
    pub is_required_list: bool,
}

/// A fully modified type as used in a field or argument position.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GraphqlType {
    pub base: Type,
    pub is_list: bool,
    pub is_required: bool,
    pub is_required_list: bool,
    /// Set iff `base` is [`Type::Intermediate`].
    pub intermediate_type: Option<Arc<IntermediateType>>,
}

impl GraphqlType {
    /// A scalar-based type.
    pub fn scalar(base: Type, options: GraphqlTypeOptions) -> Self {
        GraphqlType {
            base,
            is_list: options.is_list,
            is_required: options.is_required,
            is_required_list: options.is_required_list,
            intermediate_type: None,
        }
    }

    /// A type backed by a named intermediate type.
    pub fn intermediate(intermediate_type: Arc<IntermediateType>, options: GraphqlTypeOptions) -> Self {
        GraphqlType {
            base: Type::Intermediate,
            is_list: options.is_list,
            is_required: options.is_required,
            is_required_list: options.is_required_list,
            intermediate_type: Some(intermediate_type),
        }
    }

    /// The display name of the underlying type.
    pub fn type_name(&self) -> &str {
        match &self.intermediate_type {
            Some(intermediate) => intermediate.name(),
            None => self.base.as_str(),
        }
    }
}
