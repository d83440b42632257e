//! The `authChanged` broadcast
//!
//! Login and logout both dispatch a window `CustomEvent` carrying the new
//! user (or `null`) as a JSON string in the event detail. Delivery is
//! synchronous to whatever listeners are registered at dispatch time;
//! there is no queueing or replay for late subscribers. Storage is the
//! durable source of truth.

use serde::{Deserialize, Serialize};

use super::User;

/// Event name both login and logout dispatch under.
pub const AUTH_EVENT: &str = "authChanged";

/// Broadcast payload: the freshly authenticated user, or `None` after
/// logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthChange {
    pub user: Option<User>,
}

/// Dispatch an `authChanged` event on `window`.
#[cfg(not(feature = "ssr"))]
pub fn announce(user: Option<&User>) {
    use wasm_bindgen::JsValue;

    let change = AuthChange {
        user: user.cloned(),
    };
    if let Some(window) = web_sys::window() {
        let init = web_sys::CustomEventInit::new();
        init.set_detail(&JsValue::from_str(
            &serde_json::to_string(&change).unwrap_or_default(),
        ));
        if let Ok(event) = web_sys::CustomEvent::new_with_event_init_dict(AUTH_EVENT, &init) {
            let _ = window.dispatch_event(&event);
        }
    }
}

/// Register a handler for `authChanged` events.
///
/// The handler receives the new user (`None` after logout, and also when
/// the event detail cannot be decoded). The returned [`Subscription`]
/// removes the listener when dropped; components keep it for their mounted
/// lifetime and release it in `on_cleanup`.
#[cfg(not(feature = "ssr"))]
#[must_use = "the listener is removed when the Subscription is dropped"]
pub fn listen(handler: impl Fn(Option<User>) + 'static) -> Subscription {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let closure =
        Closure::<dyn Fn(web_sys::CustomEvent)>::new(move |event: web_sys::CustomEvent| {
            let user = event
                .detail()
                .as_string()
                .and_then(|detail| serde_json::from_str::<AuthChange>(&detail).ok())
                .and_then(|change| change.user);
            handler(user);
        });

    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback(AUTH_EVENT, closure.as_ref().unchecked_ref());
    }

    Subscription { closure }
}

/// Active `authChanged` listener registration. Dropping it unregisters the
/// listener.
pub struct Subscription {
    #[cfg(not(feature = "ssr"))]
    closure: wasm_bindgen::closure::Closure<dyn Fn(web_sys::CustomEvent)>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        #[cfg(not(feature = "ssr"))]
        {
            use wasm_bindgen::JsCast;

            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    AUTH_EVENT,
                    self.closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

// SSR stubs: no window to dispatch on or listen to.
#[cfg(feature = "ssr")]
pub fn announce(_user: Option<&User>) {}

#[cfg(feature = "ssr")]
#[must_use = "the listener is removed when the Subscription is dropped"]
pub fn listen(handler: impl Fn(Option<User>) + 'static) -> Subscription {
    let _ = handler;
    Subscription {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logout_payload_shape() {
        let json = serde_json::to_string(&AuthChange { user: None }).unwrap();
        assert_eq!(json, r#"{"user":null}"#);
    }

    #[test]
    fn test_login_payload_shape() {
        let change = AuthChange {
            user: Some(User::from_email("a@b.com")),
        };
        let json = serde_json::to_string(&change).unwrap();
        assert_eq!(json, r#"{"user":{"email":"a@b.com"}}"#);
    }

    #[test]
    fn test_payload_parses_back() {
        let change: AuthChange = serde_json::from_str(r#"{"user":{"email":"a@b.com"}}"#).unwrap();
        assert_eq!(change.user, Some(User::from_email("a@b.com")));

        let cleared: AuthChange = serde_json::from_str(r#"{"user":null}"#).unwrap();
        assert_eq!(cleared.user, None);
    }
}
