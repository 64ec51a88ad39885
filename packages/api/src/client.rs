//! # HTTP client for the authentication service
//!
//! [`HttpAuthApi`] turns every outcome of a request into the tagged
//! [`ApiError`]: transport failures become [`ApiError::Transport`], non-2xx
//! statuses become [`ApiError::Rejected`] carrying the body's `message` when
//! there is one, and an unreadable success body becomes
//! [`ApiError::Decode`]. No retries and no timeouts beyond the transport's
//! own; in the browser `reqwest` sits on top of `fetch`.

use forms::{ApiError, AuthApi, LoginInput, RegistrationInput};
use reqwest::{Client, Response};
use serde::Serialize;
use store::SessionUser;

use crate::wire::{ErrorBody, LoginResponse};

/// [`AuthApi`] over HTTP + JSON.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    client: Client,
    base_url: String,
}

impl HttpAuthApi {
    /// Client for the service rooted at `base_url`. Trailing slashes are
    /// ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Reuse an existing `reqwest` client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> Result<Response, ApiError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(rejection(response).await)
        }
    }
}

/// Build the error for a non-2xx response, salvaging `{message}` if present.
async fn rejection(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    tracing::debug!(status, has_message = message.is_some(), "request rejected");
    ApiError::Rejected { status, message }
}

impl AuthApi for HttpAuthApi {
    async fn register(&self, input: &RegistrationInput) -> Result<(), ApiError> {
        self.post("register", input).await?;
        Ok(())
    }

    async fn login(&self, input: &LoginInput) -> Result<SessionUser, ApiError> {
        let response = self.post("login", input).await?;
        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(SessionUser::new(body.user))
    }
}
