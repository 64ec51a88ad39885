//! # API crate — the HTTP side of the registration and sign-in forms
//!
//! The forms talk to an external authentication service over two JSON
//! endpoints. This crate holds the client for them and the settings that say
//! where the service lives.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`HttpAuthApi`], the [`forms::AuthApi`] implementation over `reqwest` |
//! | [`settings`] | [`Settings`] loaded from defaults, `config.toml` and the environment |
//! | [`wire`] | JSON bodies exchanged with the service |
//!
//! ## Endpoints
//!
//! | Call | Request | Success | Failure |
//! |------|---------|---------|---------|
//! | `POST {API_URL}/register` | `{name, email, password, dob, gender}` | any 2xx, body ignored | non-2xx, optional `{message}` |
//! | `POST {API_URL}/login` | `{email, password}` | `{user: <opaque>}` | non-2xx, optional `{message}` |

pub mod client;
pub mod settings;
pub mod wire;

pub use client::HttpAuthApi;
pub use settings::Settings;
