//! Errors raised while turning JSON values into inventory records.

use thiserror::Error;

/// Error parsing a single inventory entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("missing required property `{field}`")]
    MissingField { field: &'static str },

    #[error("property `{field}` must be {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },
}

impl EntryError {
    pub(crate) fn missing(field: &'static str) -> Self {
        EntryError::MissingField { field }
    }

    pub(crate) fn invalid(field: &'static str, expected: &'static str) -> Self {
        EntryError::InvalidType { field, expected }
    }

    /// The JSON key this error is about.
    pub fn field(&self) -> &'static str {
        match self {
            EntryError::MissingField { field } | EntryError::InvalidType { field, .. } => field,
        }
    }
}
