use std::fmt;

use appsync_schema::Type;

/// The built-in scalar markers usable as field and argument values.
///
/// [`Scalar::Intermediate`] is the placeholder the schema library uses for
/// named types; declaring a field with it is always an error, caught during
/// reflection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scalar {
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
    Intermediate,
}

impl Scalar {
    /// The schema-library type this marker maps to.
    pub fn as_type(&self) -> Type {
        match self {
            Scalar::Id => Type::Id,
            Scalar::String => Type::String,
            Scalar::Int => Type::Int,
            Scalar::Float => Type::Float,
            Scalar::Boolean => Type::Boolean,
            Scalar::AwsDate => Type::AwsDate,
            Scalar::AwsTime => Type::AwsTime,
            Scalar::AwsDateTime => Type::AwsDateTime,
            Scalar::AwsTimestamp => Type::AwsTimestamp,
            Scalar::AwsEmail => Type::AwsEmail,
            Scalar::AwsJson => Type::AwsJson,
            Scalar::AwsUrl => Type::AwsUrl,
            Scalar::AwsPhone => Type::AwsPhone,
            Scalar::AwsIpAddress => Type::AwsIpAddress,
            Scalar::Intermediate => Type::Intermediate,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_type().as_str())
    }
}
