//! Credentials check for the single household account.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("username or password is incorrect")]
    Invalid,
}

/// The configured household account, read from the environment at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check a login attempt. The error never says which half failed.
    pub fn verify(&self, username: &str, password: &str) -> Result<(), CredentialsError> {
        if username == self.username && password == self.password {
            Ok(())
        } else {
            Err(CredentialsError::Invalid)
        }
    }
}

// Keep the password out of debug output.
impl core::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_credentials_verify() {
        let creds = Credentials::new("taguchi", "hunter2");
        assert!(creds.verify("taguchi", "hunter2").is_ok());
    }

    #[test]
    fn wrong_password_is_rejected() {
        let creds = Credentials::new("taguchi", "hunter2");
        assert_eq!(
            creds.verify("taguchi", "wrong"),
            Err(CredentialsError::Invalid)
        );
    }

    #[test]
    fn wrong_username_is_rejected() {
        let creds = Credentials::new("taguchi", "hunter2");
        assert_eq!(
            creds.verify("someone", "hunter2"),
            Err(CredentialsError::Invalid)
        );
    }

    #[test]
    fn debug_output_redacts_the_password() {
        let creds = Credentials::new("taguchi", "hunter2");
        let debug = format!("{creds:?}");
        assert!(!debug.contains("hunter2"));
    }
}
