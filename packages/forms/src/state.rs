//! Per-form UI state.

use std::collections::BTreeMap;

use crate::fields::{Field, FormKind};
use crate::render::RenderInstruction;
use crate::visibility::Visibility;

/// Everything a form page shows: field values, errors, the submit control
/// and the password visibility. Mutated only through [`FormState::apply`]
/// and [`FormState::set_value`].
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    values: BTreeMap<Field, String>,
    field_errors: BTreeMap<Field, String>,
    global_error: Option<String>,
    submitting: bool,
    submit_label: String,
    password: Visibility,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        Self {
            values: BTreeMap::new(),
            field_errors: BTreeMap::new(),
            global_error: None,
            submitting: false,
            submit_label: kind.idle_label().to_string(),
            password: Visibility::default(),
        }
    }

    /// Current value of `field`; untouched fields read as empty.
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn has_field_errors(&self) -> bool {
        !self.field_errors.is_empty()
    }

    pub fn global_error(&self) -> Option<&str> {
        self.global_error.as_deref()
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    pub fn password_visibility(&self) -> Visibility {
        self.password
    }

    pub fn apply(&mut self, instruction: RenderInstruction) {
        match instruction {
            RenderInstruction::ClearErrors => {
                self.field_errors.clear();
                self.global_error = None;
            }
            RenderInstruction::SetFieldError { field, message } => {
                self.field_errors.insert(field, message);
            }
            RenderInstruction::ClearFieldError(field) => {
                self.field_errors.remove(&field);
            }
            RenderInstruction::ShowGlobalError(message) => {
                self.global_error = Some(message);
            }
            RenderInstruction::Busy { label } => {
                self.submitting = true;
                self.submit_label = label.to_string();
            }
            RenderInstruction::Idle { label } => {
                self.submitting = false;
                self.submit_label = label.to_string();
            }
            RenderInstruction::SetPasswordVisibility(visibility) => {
                self.password = visibility;
            }
        }
    }
}
