//! Error conversion glue between the value objects and the service layer.
//!
//! The domain layer must not depend on service error types, so the
//! conversions live here and are compiled with the `server` feature only.

use crate::domain::types::TypeConstraintError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}
