//! # The page seam
//!
//! [`FormView`] is everything the controller needs from a page: read a field,
//! apply a [`RenderInstruction`], and leave for another page. The Dioxus UI
//! implements it over a signal; [`MemoryView`] implements it over a plain
//! [`FormState`] for tests and headless use.

use crate::fields::{Field, FormKind};
use crate::render::RenderInstruction;
use crate::state::FormState;
use crate::visibility::Visibility;

pub trait FormView {
    /// Current value of `field` as typed by the user.
    fn value(&self, field: Field) -> String;

    /// Whether a submission is already in flight.
    fn is_submitting(&self) -> bool;

    fn password_visibility(&self) -> Visibility;

    fn apply(&mut self, instruction: RenderInstruction);

    /// Leave the page for `destination`, a URL relative to the current page.
    fn navigate(&mut self, destination: &str);
}

/// Headless [`FormView`] that records navigations instead of performing them.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryView {
    pub state: FormState,
    pub navigations: Vec<String>,
}

impl MemoryView {
    pub fn new(kind: FormKind) -> Self {
        Self {
            state: FormState::new(kind),
            navigations: Vec::new(),
        }
    }

    /// Builder method to pre-fill a field.
    pub fn with_value(mut self, field: Field, value: &str) -> Self {
        self.state.set_value(field, value);
        self
    }
}

impl FormView for MemoryView {
    fn value(&self, field: Field) -> String {
        self.state.value(field).to_string()
    }

    fn is_submitting(&self) -> bool {
        self.state.submitting()
    }

    fn password_visibility(&self) -> Visibility {
        self.state.password_visibility()
    }

    fn apply(&mut self, instruction: RenderInstruction) {
        self.state.apply(instruction);
    }

    fn navigate(&mut self, destination: &str) {
        self.navigations.push(destination.to_string());
    }
}
