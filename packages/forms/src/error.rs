use thiserror::Error;

/// Why a request to the authentication API did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status, optionally explaining why.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// The request never produced a response (DNS, CORS, connection reset).
    #[error("request failed: {0}")]
    Transport(String),
    /// A 2xx response whose body could not be understood.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Discriminant of [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Rejected,
    Transport,
    Decode,
}

impl ApiError {
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Rejected { .. } => ApiErrorKind::Rejected,
            ApiError::Transport(_) => ApiErrorKind::Transport,
            ApiError::Decode(_) => ApiErrorKind::Decode,
        }
    }

    /// Human-readable message supplied by the server, if any.
    ///
    /// Only rejections carry one; an empty message counts as absent.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }
}
