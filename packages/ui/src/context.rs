//! Settings context for the UI.

use api::Settings;
use dioxus::prelude::*;

/// Settings loaded once by [`SettingsProvider`].
pub fn use_settings() -> Settings {
    use_context::<Settings>()
}

/// Provider component that loads [`Settings`] and shares them with its
/// children. Wrap the router with it.
#[component]
pub fn SettingsProvider(children: Element) -> Element {
    use_context_provider(|| {
        let settings = Settings::load();
        tracing::info!(api = %settings.api.url, "settings loaded");
        settings
    });

    rsx! {
        {children}
    }
}
