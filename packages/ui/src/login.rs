//! Sign-in form.

use api::HttpAuthApi;
use dioxus::prelude::*;
use forms::{Field, FormController, FormKind, FormState};

use crate::context::use_settings;
use crate::field::{GlobalError, SubmitButton, TextField};
use crate::password::PasswordField;
use crate::storage::make_store;
use crate::view::SignalView;

/// Sign-in form. Stores the returned user and moves on to the dashboard.
///
/// `registered` shows a confirmation banner after a fresh registration.
#[component]
pub fn LoginForm(#[props(default)] registered: bool) -> Element {
    let settings = use_settings();
    let state = use_signal(|| FormState::new(FormKind::Login));
    let api = use_hook(|| HttpAuthApi::new(settings.api.url.clone()));
    let config = settings.form_config();

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let config = config.clone();
        spawn(async move {
            let mut controller = FormController::new(
                FormKind::Login,
                SignalView::new(state),
                api,
                make_store(),
                config,
            );
            let outcome = controller.submit().await;
            tracing::debug!(?outcome, "sign-in submit finished");
        });
    };

    rsx! {
        div {
            class: "auth-card",

            h1 { "Welcome back" }
            p { class: "subtitle", "Sign in to your account" }

            if registered {
                div {
                    class: "notice",
                    "Registration successful. Please sign in."
                }
            }

            form {
                id: "loginForm",
                "novalidate": true,
                onsubmit: handle_login,

                GlobalError { state }

                TextField {
                    state,
                    field: Field::Email,
                    label: "Email",
                    input_type: "email",
                    placeholder: "you@example.com",
                    autocomplete: "email",
                }
                PasswordField { state }

                SubmitButton { state }
            }

            p {
                class: "switch",
                "Don't have an account? "
                a { href: "register.html", "Create one" }
            }
        }
    }
}
