//! Error types for the movie rental service.

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Payment adapter faults.
///
/// A declined charge is not an error: providers report it as `Ok(false)`.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("Payment provider unreachable: {0}")]
    Unavailable(String),

    #[error("Payment provider error: {0}")]
    Provider(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Payment processing failed.")]
    PaymentDeclined,

    /// The request body could not be read; the detail is for logs only.
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        AppError::Internal(err.to_string())
    }
}
