//! Services turning portal requests into backend calls.

use thiserror::Error;

use crate::fetch::errors::FetchError;
use crate::forms::FormError;

pub mod groups;
pub mod lists;
pub mod study_activities;
pub mod study_sessions;
pub mod words;

#[derive(Debug, Error)]
/// Errors reported by portal services.
pub enum ServiceError {
    #[error("backend error: {0}")]
    Backend(#[from] FetchError),

    #[error("invalid form: {0}")]
    Form(String),

    #[error("{0}")]
    TypeConstraint(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
