use std::result::Result as StdResult;

use thiserror::Error;

/// Error type shared by the document and software models.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("{kind} does not support {capability}")]
    CapabilityNotSupported {
        kind: &'static str,
        capability: &'static str,
    },
    #[error("Cannot compare {left} with {right}")]
    InvalidComparisonOperand {
        left: &'static str,
        right: &'static str,
    },
    #[error("Invalid format string: {0}")]
    InvalidFormatRequest(String),
    #[error("Invalid field `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = StdResult<T, RecordError>;

impl RecordError {
    pub(crate) fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        RecordError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
