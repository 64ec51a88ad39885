use thiserror::Error;

/// Failures of the key/value layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The platform exposes no storage (private mode, no `window`, ...).
    #[error("local storage is unavailable")]
    Unavailable,
    /// The browser rejected the operation, e.g. quota exceeded.
    #[error("local storage error: {0}")]
    Js(String),
    #[error("failed to (de)serialise stored value: {0}")]
    Serialize(#[from] serde_json::Error),
}
