use crate::reservation::INCOMPLETE_SUBMISSION_MESSAGE;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// One or more of the six reservation fields is absent or empty.
    #[error("{}", INCOMPLETE_SUBMISSION_MESSAGE)]
    IncompleteSubmission,

    #[error("Validation failed: {0}")]
    Validation(String),
}
