//! Browser-local key/value persistence for the sign-in pages.
//!
//! The [`KeyValueStore`] trait mirrors the small synchronous surface of the
//! Web Storage API. [`MemoryStore`] backs tests and native builds, while
//! [`LocalStorage`] talks to `window.localStorage` on the web platform.

mod error;
pub use error::StoreError;

pub mod kv;
pub use kv::KeyValueStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub mod session;
pub use session::{clear_session_user, load_session_user, save_session_user, SessionUser, USER_KEY};
