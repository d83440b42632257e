//! Credential validation
//!
//! Runs locally before any network activity. Email must look like
//! `local@domain.tld`; the password only has to be present. Everything
//! stricter is the server's call.

use super::Credentials;

/// Per-field validation messages. Recomputed on every submit attempt and
/// cleared per-field when the user edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    /// True when submission may proceed.
    pub fn is_clean(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validate normalized credentials.
pub fn check(credentials: &Credentials) -> FieldErrors {
    let email = if credentials.email.is_empty() {
        Some("Email is required".to_string())
    } else if !is_valid_email(&credentials.email) {
        Some("Please enter a valid email".to_string())
    } else {
        None
    };

    let password = if credentials.password.is_empty() {
        Some("Password is required".to_string())
    } else {
        None
    };

    FieldErrors { email, password }
}

/// `local@domain.tld` shape: no whitespace, exactly one `@` with a
/// non-empty local part, and a domain containing a dot with at least one
/// character on each side.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .find('.')
        .is_some_and(|dot| dot > 0 && dot < domain.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_empty_email_is_required() {
        let errors = check(&credentials("", "secret"));
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert!(errors.password.is_none());
    }

    #[test]
    fn test_email_without_at_sign_is_rejected() {
        let errors = check(&credentials("nobody.example.com", "secret"));
        assert_eq!(errors.email.as_deref(), Some("Please enter a valid email"));
    }

    #[test]
    fn test_email_without_domain_segment_is_rejected() {
        for email in ["a@b", "a@", "a@b.", "a@.com", "@b.com"] {
            let errors = check(&credentials(email, "secret"));
            assert!(errors.email.is_some(), "{email} should be rejected");
        }
    }

    #[test]
    fn test_email_with_two_at_signs_is_rejected() {
        let errors = check(&credentials("a@b@c.com", "secret"));
        assert!(errors.email.is_some());
    }

    #[test]
    fn test_email_with_inner_whitespace_is_rejected() {
        let errors = check(&credentials("a b@c.com", "secret"));
        assert!(errors.email.is_some());
    }

    #[test]
    fn test_well_formed_email_passes_regardless_of_password() {
        for email in ["a@b.co", "first.last@sub.example.com", "x@y.z"] {
            let errors = check(&credentials(email, ""));
            assert!(errors.email.is_none(), "{email} should be accepted");
        }
    }

    #[test]
    fn test_empty_password_is_required() {
        let errors = check(&credentials("a@b.co", ""));
        assert_eq!(errors.password.as_deref(), Some("Password is required"));
        assert!(errors.email.is_none());
    }

    #[test]
    fn test_valid_credentials_are_clean() {
        let errors = check(&credentials("a@b.co", "secret"));
        assert!(errors.is_clean());
    }

    #[test]
    fn test_both_fields_can_error_at_once() {
        let errors = check(&credentials("", ""));
        assert!(errors.email.is_some());
        assert!(errors.password.is_some());
        assert!(!errors.is_clean());
    }
}
