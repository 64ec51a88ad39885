//! Dashboard page view.

use dioxus::prelude::*;

/// Dashboard page component.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        ui::Dashboard {}
    }
}
