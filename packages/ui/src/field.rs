//! Form building blocks that render the page's element ids: `{field}` for
//! inputs, `{field}Error` for their message slots, `globalError` and
//! `submitBtn`.

use dioxus::prelude::*;
use forms::{handle_input, Field, FormState};

use crate::view::SignalView;

/// Store the new value and clear the field's error straight away.
pub(crate) fn on_field_input(mut state: Signal<FormState>, field: Field, value: String) {
    state.write().set_value(field, value);
    handle_input(&mut SignalView::new(state), field);
}

/// Labelled text-like input with its error slot.
#[component]
pub fn TextField(
    state: Signal<FormState>,
    field: Field,
    label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] autocomplete: String,
) -> Element {
    let value = state.read().value(field).to_string();

    rsx! {
        div {
            class: "field",
            label { r#for: field.id(), "{label}" }
            input {
                id: field.id(),
                name: field.id(),
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                autocomplete: "{autocomplete}",
                value: "{value}",
                oninput: move |evt: FormEvent| on_field_input(state, field, evt.value()),
            }
            FieldError { state, field }
        }
    }
}

/// Gender picker; the first option is the empty selection.
#[component]
pub fn GenderSelect(state: Signal<FormState>) -> Element {
    let value = state.read().value(Field::Gender).to_string();

    rsx! {
        div {
            class: "field",
            label { r#for: Field::Gender.id(), "Gender" }
            select {
                id: Field::Gender.id(),
                name: Field::Gender.id(),
                value: "{value}",
                oninput: move |evt: FormEvent| on_field_input(state, Field::Gender, evt.value()),
                option { value: "", "Select gender" }
                option { value: "male", "Male" }
                option { value: "female", "Female" }
                option { value: "other", "Other" }
            }
            FieldError { state, field: Field::Gender }
        }
    }
}

/// Message slot for one field; empty when the field is fine.
#[component]
pub fn FieldError(state: Signal<FormState>, field: Field) -> Element {
    let message = state.read().error(field).unwrap_or_default().to_string();

    rsx! {
        span {
            id: field.error_id(),
            class: "error",
            "{message}"
        }
    }
}

/// Form-wide error, hidden until a request fails.
#[component]
pub fn GlobalError(state: Signal<FormState>) -> Element {
    let message = state.read().global_error().map(str::to_string);
    let class = if message.is_some() {
        "global-error"
    } else {
        "global-error hidden"
    };
    let text = message.unwrap_or_default();

    rsx! {
        div {
            id: "globalError",
            class: "{class}",
            "role": "alert",
            "{text}"
        }
    }
}

/// Submit control; disabled and relabelled while a request is in flight.
#[component]
pub fn SubmitButton(state: Signal<FormState>) -> Element {
    let submitting = state.read().submitting();
    let label = state.read().submit_label().to_string();

    rsx! {
        button {
            id: "submitBtn",
            class: "submit-btn",
            r#type: "submit",
            disabled: submitting,
            "{label}"
        }
    }
}
