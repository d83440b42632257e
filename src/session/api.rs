//! Login call against the external auth service
//!
//! One `POST {API_BASE}/api/auth/login` per submit attempt: no retry, no
//! timeout, no cancellation. The HTTP status decides the outcome; the
//! response body only contributes the token/user on success and the error
//! message on rejection, and a body that fails to parse simply contributes
//! nothing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Credentials, User};

/// Base URL of the auth service, fixed at compile time.
pub const API_BASE: &str = match option_env!("QUIZ_API_BASE") {
    Some(base) => base,
    None => "http://localhost:4000",
};

/// Fallback shown when the server rejects a login without a usable message.
#[allow(dead_code)]
const GENERIC_FAILURE: &str = "Login Failed";

/// Login failure, with `Display` carrying the user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The server answered with a non-2xx status.
    #[error("{0}")]
    Rejected(String),
    /// The request never completed; indistinguishable from a slow or
    /// unreachable server.
    #[error("Network error")]
    Network,
    /// Server-side rendering stub; the call only exists in the browser.
    #[error("login is not available during server rendering")]
    Unsupported,
}

/// A 2xx login response. The token is absent when the server accepted the
/// credentials but did not issue one; nothing is persisted in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    pub token: Option<String>,
    pub user: User,
}

#[derive(Debug, Serialize)]
#[allow(dead_code)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Wire shape of the auth response. Every field is optional; unknown
/// fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
struct LoginResponse {
    token: Option<String>,
    user: Option<User>,
    message: Option<String>,
}

/// Submit credentials to the auth service.
///
/// # Errors
///
/// [`AuthError::Rejected`] with the server's message (or a generic
/// fallback) on a non-2xx status; [`AuthError::Network`] when no response
/// arrives at all.
#[cfg(not(feature = "ssr"))]
pub async fn login(credentials: &Credentials) -> Result<LoginSuccess, AuthError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let window = web_sys::window().ok_or(AuthError::Network)?;

    let payload = LoginRequest {
        email: &credentials.email,
        password: &credentials.password,
    };

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(
        &serde_json::to_string(&payload)
            .map_err(|_| AuthError::Network)?
            .into(),
    );

    let url = format!("{API_BASE}/api/auth/login");
    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|_| AuthError::Network)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| AuthError::Network)?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| AuthError::Network)?;
    let response: Response = response.dyn_into().map_err(|_| AuthError::Network)?;

    // An unparsable body is "no message available", not a failure of its
    // own; the status code still governs the outcome.
    let body = match response.json() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|value| serde_wasm_bindgen::from_value::<LoginResponse>(value).ok()),
        Err(_) => None,
    };

    if response.ok() {
        Ok(grant(body, &credentials.email))
    } else {
        Err(AuthError::Rejected(failure_message(body.as_ref())))
    }
}

#[cfg(feature = "ssr")]
pub async fn login(_credentials: &Credentials) -> Result<LoginSuccess, AuthError> {
    Err(AuthError::Unsupported)
}

/// Build the success value from an accepted response, synthesizing the user
/// from the submitted email when the server returned none.
#[allow(dead_code)]
fn grant(body: Option<LoginResponse>, submitted_email: &str) -> LoginSuccess {
    let (token, user) = match body {
        Some(body) => (body.token, body.user),
        None => (None, None),
    };
    LoginSuccess {
        token,
        user: user.unwrap_or_else(|| User::from_email(submitted_email)),
    }
}

/// The message surfaced for a rejected login.
#[allow(dead_code)]
fn failure_message(body: Option<&LoginResponse>) -> String {
    body.and_then(|body| body.message.clone())
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(raw: &str) -> LoginResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_failure_message_prefers_server_message() {
        let response = body(r#"{"message":"Invalid credentials"}"#);
        assert_eq!(failure_message(Some(&response)), "Invalid credentials");
    }

    #[test]
    fn test_failure_message_falls_back_without_body() {
        assert_eq!(failure_message(None), "Login Failed");
    }

    #[test]
    fn test_failure_message_falls_back_without_message_field() {
        let response = body(r#"{"token":"t1"}"#);
        assert_eq!(failure_message(Some(&response)), "Login Failed");
    }

    #[test]
    fn test_grant_keeps_server_user() {
        let response = body(r#"{"token":"t1","user":{"email":"server@b.com"}}"#);
        let success = grant(Some(response), "typed@b.com");
        assert_eq!(success.token.as_deref(), Some("t1"));
        assert_eq!(success.user.email, "server@b.com");
    }

    #[test]
    fn test_grant_synthesizes_user_from_submitted_email() {
        let response = body(r#"{"token":"t1"}"#);
        let success = grant(Some(response), "typed@b.com");
        assert_eq!(success.user, User::from_email("typed@b.com"));
    }

    #[test]
    fn test_grant_without_body_still_yields_a_user() {
        let success = grant(None, "typed@b.com");
        assert_eq!(success.token, None);
        assert_eq!(success.user.email, "typed@b.com");
    }

    #[test]
    fn test_response_decode_tolerates_unknown_fields() {
        let response = body(r#"{"token":"t1","expires_in":3600,"scope":"quiz"}"#);
        assert_eq!(response.token.as_deref(), Some("t1"));
        assert!(response.user.is_none());
        assert!(response.message.is_none());
    }

    #[test]
    fn test_network_error_displays_generic_text() {
        assert_eq!(AuthError::Network.to_string(), "Network error");
        assert_eq!(
            AuthError::Rejected("Invalid credentials".to_string()).to_string(),
            "Invalid credentials"
        );
    }
}
