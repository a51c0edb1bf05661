use thiserror::Error;

/// Failures reported by a fetch capability.
///
/// Every variant reaches the list view verbatim; none of them is retried
/// automatically.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend responded with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Malformed(String),
}
