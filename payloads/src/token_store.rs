use crate::{Session, User};
use std::collections::HashMap;
use std::sync::Mutex;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key for the JSON-serialized [`User`].
pub const USER_KEY: &str = "auth_user";

/// Persisted authentication state.
///
/// Implementations must never panic: a backend that is unavailable behaves
/// as if it were empty, and writes to it are dropped.
pub trait TokenStore: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);

    fn get_token(&self) -> Option<String> {
        self.get_item(TOKEN_KEY)
    }

    fn set_token(&self, token: &str) {
        self.set_item(TOKEN_KEY, token);
    }

    fn remove_token(&self) {
        self.remove_item(TOKEN_KEY);
    }

    /// The raw stored user JSON.
    fn get_user(&self) -> Option<String> {
        self.get_item(USER_KEY)
    }

    fn set_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.set_item(USER_KEY, &json),
            Err(e) => tracing::warn!("Failed to serialize user: {e}"),
        }
    }

    fn remove_user(&self) {
        self.remove_item(USER_KEY);
    }

    fn clear_all(&self) {
        self.remove_token();
        self.remove_user();
    }

    fn has_token(&self) -> bool {
        self.get_token().is_some()
    }

    /// The stored user, or `None` when absent or malformed.
    fn current_user(&self) -> Option<User> {
        self.get_user()
            .and_then(|json| serde_json::from_str(&json).ok())
    }

    /// Rebuild a session from storage. Both the token and a readable user
    /// must be present.
    fn session(&self) -> Option<Session> {
        let token = self.get_token()?;
        let user = self.current_user()?;
        Some(Session::new(token, user))
    }

    fn store_session(&self, session: &Session) {
        self.set_token(&session.access_token);
        self.set_user(&session.user());
    }
}

/// Process-local store for tests and native clients.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
    }

    fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Role, UserId};

    fn admin() -> User {
        User {
            id: UserId::from("u1"),
            email: "admin@cowork.test".into(),
            name: "Admin".into(),
            role: Role::Admin,
        }
    }

    #[test]
    fn token_round_trips_and_clears() {
        let store = MemoryTokenStore::new();
        assert!(!store.has_token());

        store.set_token("abc");
        store.set_user(&admin());
        assert_eq!(store.get_token().as_deref(), Some("abc"));
        assert_eq!(store.current_user(), Some(admin()));

        store.clear_all();
        assert!(!store.has_token());
        assert_eq!(store.get_user(), None);
    }

    #[test]
    fn malformed_user_reads_as_absent() {
        let store = MemoryTokenStore::new();
        store.set_token("abc");
        store.set_item(USER_KEY, "{not json");
        assert_eq!(store.current_user(), None);
        assert_eq!(store.session(), None);
    }

    #[test]
    fn session_needs_token_and_user() {
        let store = MemoryTokenStore::new();
        store.set_user(&admin());
        assert_eq!(store.session(), None);

        store.set_token("tok");
        let session = store.session().unwrap();
        assert_eq!(session.access_token, "tok");
        assert_eq!(session.user(), admin());
    }
}
