//! JSON bodies returned by the authentication service.
//!
//! Request bodies are the [`forms::RegistrationInput`] and
//! [`forms::LoginInput`] types themselves.

use serde::Deserialize;
use serde_json::Value;

/// Successful `/login` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    /// Opaque user object; `null` when the server leaves it out.
    #[serde(default)]
    pub user: Value,
}

/// Body of a rejected request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
