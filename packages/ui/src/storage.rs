//! Shared key/value store constructor for all platforms.
//!
//! Returns a [`store::KeyValueStore`] backed by:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Native**: a process-wide [`store::MemoryStore`], so every page sees
//!   the same entries

/// Create the platform-appropriate store.
pub fn make_store() -> impl store::KeyValueStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::LazyLock;

        static SHARED: LazyLock<store::MemoryStore> = LazyLock::new(store::MemoryStore::new);
        SHARED.clone()
    }
}
