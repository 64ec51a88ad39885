//! Sign-in page view.

use dioxus::prelude::*;
use ui::LoginForm;

/// Login page component. `?registered=true` confirms a fresh account.
#[component]
pub fn Login(registered: bool) -> Element {
    rsx! {
        LoginForm { registered }
    }
}
