//! Validation errors raised when constructing domain values

use thiserror::Error;

/// Validation error for domain models
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Value doesn't match the required format
    #[error("{field}: {reason}")]
    InvalidFormat { field: &'static str, reason: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let err = ValidationError::TooLong { field: "slug", max: 96 };
        assert_eq!(err.to_string(), "slug exceeds maximum length of 96 characters");

        let err = ValidationError::Empty { field: "slug" };
        assert_eq!(err.to_string(), "slug cannot be empty");
    }
}
