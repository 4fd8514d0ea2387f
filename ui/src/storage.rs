//! Browser local storage behind the `TokenStore` trait.

use payloads::TokenStore;

/// Token store backed by `window.localStorage`.
///
/// Every call looks the storage up again, so the type holds nothing and is
/// trivially `Send + Sync`. Without a window or storage (private browsing
/// with storage disabled, non-browser contexts) reads return `None` and
/// writes are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl BrowserTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for BrowserTokenStore {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage()
            && storage.set_item(key, value).is_err()
        {
            tracing::warn!("Could not write {key} to local storage");
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
