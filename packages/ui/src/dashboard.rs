//! Landing page after sign-in.

use dioxus::prelude::*;
use store::{clear_session_user, load_session_user};

use crate::storage::make_store;
use crate::view::navigate;

/// Greets the stored user and offers signing out.
#[component]
pub fn Dashboard() -> Element {
    let user = use_hook(|| match load_session_user(&make_store()) {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("Ignoring unreadable stored user: {}", e);
            None
        }
    });

    let sign_out = move |_| {
        if let Err(e) = clear_session_user(&make_store()) {
            tracing::error!("Failed to clear stored user: {}", e);
        }
        navigate("login.html");
    };

    let Some(user) = user else {
        return rsx! {
            div {
                class: "auth-card",
                h1 { "You are not signed in" }
                p {
                    class: "switch",
                    a { href: "login.html", "Sign in" }
                }
            }
        };
    };

    let greeting = match user.display_name() {
        Some(name) => format!("Welcome, {name}!"),
        None => "Welcome!".to_string(),
    };

    rsx! {
        div {
            class: "auth-card",
            h1 { "{greeting}" }
            p { class: "subtitle", "You are signed in." }
            button {
                class: "submit-btn",
                onclick: sign_out,
                "Sign out"
            }
        }
    }
}
