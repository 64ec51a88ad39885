//! # Signed-in user persistence
//!
//! The login endpoint returns an opaque `user` object. It is stored verbatim,
//! as JSON, under the fixed key [`USER_KEY`] so later pages can tell who is
//! signed in. There is no expiry and no schema: a new login overwrites the
//! entry and signing out removes it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::kv::KeyValueStore;
use crate::StoreError;

/// Storage key holding the signed-in user.
pub const USER_KEY: &str = "user";

/// Opaque user payload returned by the authentication API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionUser(Value);

impl SessionUser {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Best-effort greeting name: the `name` field, then `email`.
    pub fn display_name(&self) -> Option<&str> {
        ["name", "email"]
            .iter()
            .find_map(|key| {
                self.0
                    .get(key)
                    .and_then(Value::as_str)
                    .filter(|name| !name.is_empty())
            })
    }
}

/// Persist `user` under [`USER_KEY`], replacing any previous user.
pub fn save_session_user(store: &impl KeyValueStore, user: &SessionUser) -> Result<(), StoreError> {
    let json = serde_json::to_string(user)?;
    store.set(USER_KEY, &json)?;
    tracing::debug!("stored session user");
    Ok(())
}

/// Load the stored user, if one is present.
pub fn load_session_user(store: &impl KeyValueStore) -> Result<Option<SessionUser>, StoreError> {
    let Some(json) = store.get(USER_KEY)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&json)?))
}

/// Forget the stored user.
pub fn clear_session_user(store: &impl KeyValueStore) -> Result<(), StoreError> {
    store.remove(USER_KEY)
}
