// Session marker store
//
// The browser app kept a fake token and the email in localStorage; the CLI
// keeps the same marker in a small JSON file. Login is the hardcoded demo
// check; nothing downstream enforces authorization.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::validate;

pub const DEMO_EMAIL: &str = "admin@admin.com";
pub const DEMO_PASSWORD: &str = "admin";
const DEMO_TOKEN: &str = "fake-user-token";

/// The stored session marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub email: String,
}

/// File-backed key-value analog of the browser's local storage.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate the form, run the demo credential check, and persist the
    /// marker on success.
    pub fn login(&self, email: &str, password: &str) -> Result<Session> {
        validate::require_email("email", email)?;
        validate::require("password", password)?;

        if email != DEMO_EMAIL || password != DEMO_PASSWORD {
            return Err(CoreError::validation("Invalid email or password"));
        }

        let session = Session {
            token: DEMO_TOKEN.to_string(),
            email: email.to_string(),
        };
        let body = serde_json::to_string_pretty(&session)
            .map_err(|err| CoreError::session(err.to_string()))?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| CoreError::session(err.to_string()))?;
        }
        fs::write(&self.path, body).map_err(|err| CoreError::session(err.to_string()))?;
        Ok(session)
    }

    /// The current marker, if a login is stored.
    pub fn current(&self) -> Result<Option<Session>> {
        match fs::read_to_string(&self.path) {
            Ok(body) => {
                let session = serde_json::from_str(&body)
                    .map_err(|err| CoreError::session(err.to_string()))?;
                Ok(Some(session))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(CoreError::session(err.to_string())),
        }
    }

    /// Clear the marker. Idempotent.
    pub fn logout(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(CoreError::session(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(name: &str) -> SessionStore {
        let mut path = std::env::temp_dir();
        path.push(format!("backoffice-session-{name}-{}", std::process::id()));
        path.push("session.json");
        SessionStore::new(path)
    }

    #[test]
    fn login_roundtrip_and_logout() {
        let store = store("roundtrip");
        let session = store.login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
        assert_eq!(session.email, DEMO_EMAIL);
        assert_eq!(store.current().unwrap(), Some(session));

        store.logout().unwrap();
        assert_eq!(store.current().unwrap(), None);
        // idempotent
        store.logout().unwrap();
    }

    #[test]
    fn wrong_credentials_are_rejected_without_writing() {
        let store = store("rejected");
        assert!(store.login(DEMO_EMAIL, "nope").is_err());
        assert!(store.login("not-an-email", "admin").is_err());
        assert_eq!(store.current().unwrap(), None);
    }
}
