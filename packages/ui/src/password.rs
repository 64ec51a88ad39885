//! Password input with a show/hide toggle.

use dioxus::prelude::*;
use forms::{toggle_password, Field, FormState, IconId};

use crate::field::{on_field_input, FieldError};
use crate::icons::{FaEye, FaEyeSlash};
use crate::view::SignalView;
use crate::Icon;

/// The `password` input, its `eyeIcon` toggle and its error slot.
///
/// The icon advertises what a click does: an open eye while the password is
/// obscured, a slashed eye while it is shown.
#[component]
pub fn PasswordField(
    state: Signal<FormState>,
    #[props(default = "Password".to_string())] label: String,
    #[props(default = "current-password".to_string())] autocomplete: String,
) -> Element {
    let value = state.read().value(Field::Password).to_string();
    let visibility = state.read().password_visibility();
    let icon = visibility.icon();
    let toggle_label = match icon {
        IconId::Eye => "Show password",
        IconId::EyeOff => "Hide password",
    };

    rsx! {
        div {
            class: "field",
            label { r#for: Field::Password.id(), "{label}" }
            div {
                class: "password-wrapper",
                input {
                    id: Field::Password.id(),
                    name: Field::Password.id(),
                    r#type: visibility.input_type(),
                    autocomplete: "{autocomplete}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| on_field_input(state, Field::Password, evt.value()),
                }
                button {
                    class: "toggle-password",
                    r#type: "button",
                    title: toggle_label,
                    "aria-label": toggle_label,
                    onclick: move |_| {
                        toggle_password(&mut SignalView::new(state));
                    },
                    span {
                        id: "eyeIcon",
                        "data-icon": "{icon}",
                        if icon == IconId::Eye {
                            Icon { icon: FaEye, width: 16, height: 16 }
                        } else {
                            Icon { icon: FaEyeSlash, width: 16, height: 16 }
                        }
                    }
                }
            }
            FieldError { state, field: Field::Password }
        }
    }
}
