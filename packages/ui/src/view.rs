//! [`FormView`] over a Dioxus signal.
//!
//! Every [`RenderInstruction`] is written into the form's
//! `Signal<FormState>`; the write is what schedules the re-render, including
//! the password icon swap.

use dioxus::prelude::*;
use forms::{Field, FormState, FormView, RenderInstruction, Visibility};

/// The page side of a form controller.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalView {
    state: Signal<FormState>,
}

impl SignalView {
    pub fn new(state: Signal<FormState>) -> Self {
        Self { state }
    }
}

impl FormView for SignalView {
    fn value(&self, field: Field) -> String {
        self.state.read().value(field).to_string()
    }

    fn is_submitting(&self) -> bool {
        self.state.read().submitting()
    }

    fn password_visibility(&self) -> Visibility {
        self.state.read().password_visibility()
    }

    fn apply(&mut self, instruction: RenderInstruction) {
        self.state.write().apply(instruction);
    }

    fn navigate(&mut self, destination: &str) {
        navigate(destination);
    }
}

/// Load `destination`, resolved against the current page, as a full page
/// navigation.
pub fn navigate(destination: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(destination) {
                tracing::error!("Failed to navigate to {}: {:?}", destination, err);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("Navigation to {} is only available in the browser", destination);
    }
}
