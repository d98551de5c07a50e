/// Errors from talking to the intake service.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request failed or the body could not be decoded.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The configured origin cannot be sent as a header.
    #[error("Invalid origin header '{0}'")]
    InvalidOrigin(String),
}
