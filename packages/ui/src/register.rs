//! Registration form.

use api::HttpAuthApi;
use dioxus::prelude::*;
use forms::{Field, FormController, FormKind, FormState};

use crate::context::use_settings;
use crate::field::{GenderSelect, GlobalError, SubmitButton, TextField};
use crate::password::PasswordField;
use crate::storage::make_store;
use crate::view::SignalView;

/// Account creation form. Redirects to the sign-in page once the account
/// exists.
#[component]
pub fn RegisterForm() -> Element {
    let settings = use_settings();
    let state = use_signal(|| FormState::new(FormKind::Register));
    let api = use_hook(|| HttpAuthApi::new(settings.api.url.clone()));
    let config = settings.form_config();

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let config = config.clone();
        spawn(async move {
            let mut controller = FormController::new(
                FormKind::Register,
                SignalView::new(state),
                api,
                make_store(),
                config,
            );
            let outcome = controller.submit().await;
            tracing::debug!(?outcome, "registration submit finished");
        });
    };

    rsx! {
        div {
            class: "auth-card",

            h1 { "Create Account" }
            p { class: "subtitle", "Fill in your details to get started" }

            form {
                id: "registerForm",
                "novalidate": true,
                onsubmit: handle_register,

                GlobalError { state }

                TextField {
                    state,
                    field: Field::Name,
                    label: "Full name",
                    placeholder: "Jane Doe",
                    autocomplete: "name",
                }
                TextField {
                    state,
                    field: Field::Email,
                    label: "Email",
                    input_type: "email",
                    placeholder: "you@example.com",
                    autocomplete: "email",
                }
                PasswordField {
                    state,
                    label: "Password (6+ characters)",
                    autocomplete: "new-password",
                }
                TextField {
                    state,
                    field: Field::Dob,
                    label: "Date of birth",
                    input_type: "date",
                }
                if settings.registration.gender {
                    GenderSelect { state }
                }

                SubmitButton { state }
            }

            p {
                class: "switch",
                "Already have an account? "
                a { href: "login.html", "Sign in" }
            }
        }
    }
}
