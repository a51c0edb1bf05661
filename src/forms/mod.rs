//! Form definitions backing the study session routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod study_sessions;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid group id")]
    InvalidGroupId,

    #[error("invalid study activity id")]
    InvalidStudyActivityId,

    #[error("invalid word id")]
    InvalidWordId,
}
