use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use views::{Dashboard, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/register.html")]
    Register {},
    #[route("/login.html?:registered")]
    Login { registered: bool },
    #[route("/dashboard.html")]
    Dashboard {},
}

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "Account" }
        document::Link { rel: "stylesheet", href: ui::FORMS_CSS }

        ui::SettingsProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the sign-in page
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Login { registered: false });
    rsx! {}
}
