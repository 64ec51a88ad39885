//! # Forms crate — registration and sign-in form logic
//!
//! Everything the two authentication pages do that is not drawing pixels
//! lives here, free of any UI framework so it can be exercised by plain unit
//! tests:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`email`] | Email address grammar check used by both forms |
//! | [`fields`] | Field identifiers, form kinds and the typed inputs sent to the API |
//! | [`validation`] | Field rules producing a [`ValidationResult`] |
//! | [`render`] | [`RenderInstruction`]s and the pure mapping from validation errors to them |
//! | [`visibility`] | Password show/hide state and its icon |
//! | [`state`] | [`FormState`], the per-form UI state the instructions mutate |
//! | [`view`] | The [`FormView`] seam and the headless [`MemoryView`] |
//! | [`controller`] | [`FormController`], the submit state machine, and the [`AuthApi`] seam |

pub mod controller;
pub mod email;
mod error;
pub mod fields;
pub mod render;
pub mod state;
pub mod validation;
pub mod view;
pub mod visibility;

pub use controller::{
    handle_input, toggle_password, AuthApi, FormConfig, FormController, Redirects, SubmitOutcome,
};
pub use email::is_valid_email;
pub use error::{ApiError, ApiErrorKind};
pub use fields::{Field, FormKind, LoginInput, RegistrationInput};
pub use render::RenderInstruction;
pub use state::FormState;
pub use validation::{FieldError, RegistrationRules, ValidationResult};
pub use view::{FormView, MemoryView};
pub use visibility::{IconId, Visibility};
