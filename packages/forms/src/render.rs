//! Render instructions: the only way form logic changes what the page shows.

use crate::fields::Field;
use crate::validation::ValidationResult;
use crate::visibility::Visibility;

/// One change to the form's UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderInstruction {
    /// Blank every field error and hide the global error.
    ClearErrors,
    SetFieldError { field: Field, message: String },
    ClearFieldError(Field),
    /// Show a form-wide message (server or network failure).
    ShowGlobalError(String),
    /// Disable the submit control and relabel it.
    Busy { label: &'static str },
    /// Re-enable the submit control and relabel it.
    Idle { label: &'static str },
    SetPasswordVisibility(Visibility),
}

/// Instructions that display every error in `result`, one per field.
pub fn validation_errors(result: &ValidationResult) -> Vec<RenderInstruction> {
    result
        .iter()
        .map(|error| RenderInstruction::SetFieldError {
            field: error.field,
            message: error.message.to_string(),
        })
        .collect()
}
