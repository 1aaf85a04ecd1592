//! Account records.

use serde::{Deserialize, Serialize};

/// A registered account: a unique login and the one-way hash of its secret.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub login: String,
    /// PHC-format hash string. Never the secret itself.
    pub password_hash: String,
}

impl Account {
    #[must_use]
    pub fn new(login: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password_hash: password_hash.into(),
        }
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("login", &self.login)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}
