//! Client-side session handling
//!
//! This module owns everything around the authenticated session:
//! - Credential validation and the one login API call
//! - Token/user persistence in browser local storage
//! - The `authChanged` broadcast that keeps sibling components in sync
//!
//! The durable source of truth is local storage; the broadcast only informs
//! components that are currently mounted.

pub mod api;
pub mod events;
pub mod store;
pub mod validate;

use serde::{Deserialize, Serialize};

pub use api::{AuthError, LoginSuccess, login};
pub use events::{Subscription, announce, listen};
pub use store::{MemoryStore, SessionStore, StoreError};
pub use validate::{FieldErrors, check};

/// Email/password pair for a single login attempt. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Trim and lowercase the email before validation and submission.
    /// The password is sent as typed.
    pub fn normalized(self) -> Self {
        Self {
            email: self.email.trim().to_lowercase(),
            password: self.password,
        }
    }
}

/// User record as returned by the auth server, or synthesized from the
/// submitted email when the server omits it. Unknown server fields are
/// ignored on decode; absent optional fields are omitted on encode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    pub fn from_email(email: &str) -> Self {
        Self {
            email: email.to_string(),
            name: None,
        }
    }
}

/// The client-held record of an authenticated user. Created on successful
/// login, destroyed on logout, durable across reloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Persist a fresh login and announce it.
///
/// Persistence is best-effort: a storage write failure is logged and
/// swallowed, so the broadcast can run ahead of what storage holds. The
/// token is only written when the server actually issued one.
#[cfg(not(feature = "ssr"))]
pub fn establish(login: &LoginSuccess) {
    if let Some(token) = &login.token {
        let session = Session {
            token: token.clone(),
            user: login.user.clone(),
        };
        if let Err(err) = store::write_session(&store::BrowserStore, &session) {
            leptos::logging::warn!("session not persisted: {err}");
        }
    }
    events::announce(Some(&login.user));
}

/// End the session: remove the session keys and announce an empty session.
///
/// Only the two session keys are touched; unrelated storage owned by the
/// origin is left alone.
#[cfg(not(feature = "ssr"))]
pub fn logout() {
    store::clear_session(&store::BrowserStore);
    events::announce(None);
}

/// Whether a session token is currently persisted. This alone drives the
/// logged-in/logged-out display state.
#[cfg(not(feature = "ssr"))]
pub fn is_logged_in() -> bool {
    store::read_token(&store::BrowserStore).is_some()
}

/// The persisted user record, if any.
#[cfg(not(feature = "ssr"))]
pub fn current_user() -> Option<User> {
    store::read_user(&store::BrowserStore)
}

// Server-side stubs: there is no browser storage during SSR, so the server
// always renders the logged-out state and lets hydration catch up.
#[cfg(feature = "ssr")]
pub fn establish(_login: &LoginSuccess) {}

#[cfg(feature = "ssr")]
pub fn logout() {}

#[cfg(feature = "ssr")]
pub fn is_logged_in() -> bool {
    false
}

#[cfg(feature = "ssr")]
pub fn current_user() -> Option<User> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_trims_and_lowercases_email() {
        let credentials = Credentials {
            email: "  User@Example.COM \n".to_string(),
            password: "hunter2".to_string(),
        };
        let normalized = credentials.normalized();
        assert_eq!(normalized.email, "user@example.com");
        assert_eq!(normalized.password, "hunter2");
    }

    #[test]
    fn test_normalized_leaves_password_untouched() {
        let credentials = Credentials {
            email: "a@b.co".to_string(),
            password: "  CaSe Sensitive  ".to_string(),
        };
        assert_eq!(credentials.normalized().password, "  CaSe Sensitive  ");
    }

    #[test]
    fn test_synthesized_user_encodes_without_optional_fields() {
        let user = User::from_email("a@b.com");
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"email":"a@b.com"}"#);
    }

    #[test]
    fn test_user_decode_ignores_unknown_fields() {
        let user: User =
            serde_json::from_str(r#"{"email":"a@b.com","name":"Ada","role":"admin"}"#).unwrap();
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.name.as_deref(), Some("Ada"));
    }
}
