//! Error types for parameter reflection

use super::ParamValue;
use thiserror::Error;

/// Parameter reflection errors
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("unknown parameter {name:?}; valid parameters are: {}", .valid.join(", "))]
    UnknownParameter { name: String, valid: Vec<String> },

    #[error("parameter {name:?} expects {expected}, got {got} ({})", .got.type_name())]
    TypeMismatch {
        name: String,
        expected: &'static str,
        got: ParamValue,
    },
}

impl ParamError {
    /// Unknown-parameter error from a declared name list
    pub fn unknown(name: impl Into<String>, valid: &[&str]) -> Self {
        ParamError::UnknownParameter {
            name: name.into(),
            valid: valid.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Type-mismatch error for a recognized parameter
    pub fn mismatch(name: impl Into<String>, expected: &'static str, got: ParamValue) -> Self {
        ParamError::TypeMismatch {
            name: name.into(),
            expected,
            got,
        }
    }
}

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, ParamError>;
