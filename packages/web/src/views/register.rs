//! Registration page view.

use dioxus::prelude::*;
use ui::RegisterForm;

/// Register page component.
#[component]
pub fn Register() -> Element {
    rsx! {
        RegisterForm {}
    }
}
