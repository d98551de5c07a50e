pub mod content;
pub mod reservation;

use crate::error::AppError;

/// Fallback for unmatched routes, keeping the JSON envelope.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Fallback for known routes called with the wrong method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
