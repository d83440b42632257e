//! Session persistence over a small key-value interface
//!
//! The storage backend sits behind [`SessionStore`] so the session
//! read/write logic can run against an in-memory map in native tests and
//! against `window.localStorage` in the browser.

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::{Session, User};

/// Storage key for the session token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key for the JSON-encoded user record.
pub const USER_KEY: &str = "currentUser";

/// Storage failure. Callers treat persistence as best-effort and are
/// expected to log and continue.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("storage write rejected")]
    WriteRejected,
}

/// Minimal key-value storage contract: get/set/remove on string keys.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str);
}

/// Write both session keys. The token is stored verbatim, the user record
/// JSON-encoded. Partial writes are possible if the backend rejects the
/// second key; readers tolerate that.
pub fn write_session<S: SessionStore>(store: &S, session: &Session) -> Result<(), StoreError> {
    store.set(TOKEN_KEY, &session.token)?;
    store.set(
        USER_KEY,
        &serde_json::to_string(&session.user).unwrap_or_default(),
    )
}

/// The persisted token, if any.
pub fn read_token<S: SessionStore>(store: &S) -> Option<String> {
    store.get(TOKEN_KEY)
}

/// The persisted user record. A missing or corrupt value reads as `None`.
pub fn read_user<S: SessionStore>(store: &S) -> Option<User> {
    decode(store.get(USER_KEY))
}

/// Remove both session keys. Nothing else in the store is touched.
pub fn clear_session<S: SessionStore>(store: &S) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}

fn decode<T: DeserializeOwned>(value: Option<String>) -> Option<T> {
    value.and_then(|raw| serde_json::from_str(&raw).ok())
}

/// `window.localStorage`, accessed synchronously. Any missing piece of the
/// browser environment reads as an empty store.
#[cfg(not(feature = "ssr"))]
pub struct BrowserStore;

#[cfg(not(feature = "ssr"))]
impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(not(feature = "ssr"))]
impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StoreError::WriteRejected)
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store used by native tests.
pub struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: std::cell::RefCell::new(std::collections::HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            token: "t1".to_string(),
            user: User::from_email("a@b.com"),
        }
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let store = MemoryStore::new();
        write_session(&store, &session()).unwrap();

        assert_eq!(read_token(&store).as_deref(), Some("t1"));
        assert_eq!(read_user(&store), Some(User::from_email("a@b.com")));
    }

    #[test]
    fn test_user_record_is_stored_as_json() {
        let store = MemoryStore::new();
        write_session(&store, &session()).unwrap();

        assert_eq!(store.get(USER_KEY).as_deref(), Some(r#"{"email":"a@b.com"}"#));
    }

    #[test]
    fn test_corrupt_user_record_reads_as_none() {
        let store = MemoryStore::new();
        store.set(USER_KEY, "not json {").unwrap();

        assert_eq!(read_user(&store), None);
    }

    #[test]
    fn test_clear_session_removes_both_keys() {
        let store = MemoryStore::new();
        store.set("quiz-draft", "42").unwrap();
        write_session(&store, &session()).unwrap();

        clear_session(&store);

        assert_eq!(read_token(&store), None);
        assert_eq!(read_user(&store), None);
        // Unrelated keys survive a logout.
        assert_eq!(store.get("quiz-draft").as_deref(), Some("42"));
    }

    #[test]
    fn test_rejecting_backend_reports_without_panicking() {
        struct RejectingStore;
        impl SessionStore for RejectingStore {
            fn get(&self, _key: &str) -> Option<String> {
                None
            }
            fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
                Err(StoreError::WriteRejected)
            }
            fn remove(&self, _key: &str) {}
        }

        let result = write_session(&RejectingStore, &session());
        assert!(matches!(result, Err(StoreError::WriteRejected)));
        assert_eq!(read_token(&RejectingStore), None);
    }
}
