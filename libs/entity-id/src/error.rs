//! Error types for entity ID parsing and configuration.

use thiserror::Error;

/// Errors that can occur when parsing or validating entity IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntityIdError {
    /// The raw value was absent and the call site did not allow null.
    #[error("Null entity ID")]
    NullNotAllowed { parameter: Option<String> },

    /// The raw value matches none of the accepted formats.
    #[error("{}", invalid_message(.parameter.as_deref(), .input))]
    Malformed {
        input: String,
        parameter: Option<String>,
    },

    /// A shard, realm, num, or packed value exceeds its bit width.
    #[error("{}", invalid_message(.parameter.as_deref(), .input))]
    OutOfRange {
        input: String,
        parameter: Option<String>,
    },
}

fn invalid_message(parameter: Option<&str>, input: &str) -> String {
    match parameter {
        Some(name) => format!("Invalid parameter: {name}"),
        None => format!("Invalid entity ID \"{input}\""),
    }
}

impl EntityIdError {
    pub(crate) fn malformed(input: &str, parameter: Option<&str>) -> Self {
        EntityIdError::Malformed {
            input: input.to_string(),
            parameter: parameter.map(str::to_string),
        }
    }

    pub(crate) fn out_of_range(input: &str, parameter: Option<&str>) -> Self {
        EntityIdError::OutOfRange {
            input: input.to_string(),
            parameter: parameter.map(str::to_string),
        }
    }

    /// Returns true if this error indicates a disallowed null value.
    pub fn is_null_error(&self) -> bool {
        matches!(self, EntityIdError::NullNotAllowed { .. })
    }

    /// Returns true if a field or the packed value was too large.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, EntityIdError::OutOfRange { .. })
    }

    /// The caller supplied parameter name, if any.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            EntityIdError::NullNotAllowed { parameter }
            | EntityIdError::Malformed { parameter, .. }
            | EntityIdError::OutOfRange { parameter, .. } => parameter.as_deref(),
        }
    }

    /// The offending raw input. Empty for null errors.
    pub fn input(&self) -> &str {
        match self {
            EntityIdError::NullNotAllowed { .. } => "",
            EntityIdError::Malformed { input, .. } | EntityIdError::OutOfRange { input, .. } => {
                input
            }
        }
    }
}

/// Errors raised while loading codec configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable holds a value that does not parse.
    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },

    /// The configured system shard exceeds the shard bit width.
    #[error("system shard {0} exceeds the maximum shard {max}", max = crate::MAX_SHARD)]
    ShardOutOfRange(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_scoped_message() {
        let err = EntityIdError::malformed("abc", Some("account.id"));
        assert_eq!(err.to_string(), "Invalid parameter: account.id");
        assert_eq!(err.parameter(), Some("account.id"));
        assert_eq!(err.input(), "abc");
    }

    #[test]
    fn test_generic_message_embeds_input() {
        let err = EntityIdError::out_of_range("0.0.4294967296", None);
        assert_eq!(err.to_string(), "Invalid entity ID \"0.0.4294967296\"");
        assert!(err.is_out_of_range());
        assert!(!err.is_null_error());
    }

    #[test]
    fn test_null_message() {
        let err = EntityIdError::NullNotAllowed { parameter: None };
        assert_eq!(err.to_string(), "Null entity ID");
        assert!(err.is_null_error());

        let err = EntityIdError::NullNotAllowed {
            parameter: Some("from".to_string()),
        };
        assert_eq!(err.to_string(), "Null entity ID");
        assert_eq!(err.parameter(), Some("from"));
    }

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::ShardOutOfRange(40000);
        assert_eq!(
            err.to_string(),
            "system shard 40000 exceeds the maximum shard 32767"
        );
    }
}
