//! Credential check boundary for the login screen.

use secrecy::{ExposeSecret, SecretString};

use crate::error::Result;

/// What the login screen collects
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        let password: String = password.into();
        Self {
            email: email.into(),
            password: SecretString::from(password),
        }
    }

    pub fn has_password(&self) -> bool {
        !self.password.expose_secret().is_empty()
    }
}

/// Checks login credentials.
///
/// Implementations return `Err(HelpdeskError::Auth(..))` to refuse a login.
pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<()>;
}

/// Lets everyone in without inspecting the credentials
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Authenticator for AcceptAll {
    fn authenticate(&self, credentials: &Credentials) -> Result<()> {
        tracing::debug!(
            email = %credentials.email,
            has_password = credentials.has_password(),
            "accepting login without a credential check"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_all_accepts_empty_credentials() {
        assert!(AcceptAll.authenticate(&Credentials::new("", "")).is_ok());
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("user@example.com", "hunter2");
        let debug = format!("{creds:?}");
        assert!(debug.contains("user@example.com"));
        assert!(!debug.contains("hunter2"));
        assert!(creds.has_password());
    }
}
