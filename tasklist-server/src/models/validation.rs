//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Required field was not supplied
    Missing { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Numeric field is outside its allowed range
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
    },

    /// Numeric field is below its minimum
    TooSmall { field: &'static str, min: u32 },

    /// Request body could not be parsed into the expected shape
    Malformed { detail: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::OutOfRange { field, min, max } => {
                write!(f, "{} must be between {} and {}", field, min, max)
            }
            Self::TooSmall { field, min } => {
                write!(f, "{} must be at least {}", field, min)
            }
            Self::Malformed { detail } => write!(f, "malformed request: {}", detail),
        }
    }
}

impl std::error::Error for ValidationError {}
