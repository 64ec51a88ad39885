//! This crate contains the shared UI for the registration and sign-in pages.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod context;
pub use context::{use_settings, SettingsProvider};

mod storage;
pub use storage::make_store;

mod view;
pub use view::{navigate, SignalView};

mod field;
pub use field::{FieldError, GenderSelect, GlobalError, SubmitButton, TextField};

mod password;
pub use password::PasswordField;

mod register;
pub use register::RegisterForm;

mod login;
pub use login::LoginForm;

mod dashboard;
pub use dashboard::Dashboard;

pub const FORMS_CSS: Asset = asset!("/assets/forms.css");
