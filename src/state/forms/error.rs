//! Editor error taxonomy

use super::field::FieldType;
use thiserror::Error;

/// Errors produced by form editor operations.
///
/// None of these are fatal: a rejected mutation leaves the editor as it
/// was, and a failed submission can be retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// A mutation referenced a field or option that does not exist
    #[error("Index {index} is out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The operation needs a field of a different type
    #[error("Expected a {expected} field, found {actual}")]
    InvalidFieldType {
        expected: FieldType,
        actual: FieldType,
    },

    /// The forms API rejected the submission
    #[error("Failed to save form: {0}")]
    SubmissionFailed(String),
}
