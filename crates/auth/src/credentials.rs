//! In-memory credential store.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role identifier granted to an authenticated user.
///
/// Roles are intentionally opaque strings at this layer; nothing here assigns
/// meaning to them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single username/password/roles entry.
///
/// The password is held in plain text: this store exists to demonstrate the
/// authentication gate, not to be an identity system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    username: String,
    password: String,
    roles: Vec<Role>,
}

impl CredentialRecord {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        roles: Vec<Role>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            roles,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Single-record, in-memory credential store.
///
/// Constructed once at process start and read-only afterwards; every request
/// is verified against the same record (stateless authentication, no
/// sessions).
#[derive(Debug, Clone)]
pub struct CredentialStore {
    record: CredentialRecord,
}

impl CredentialStore {
    pub fn single(record: CredentialRecord) -> Self {
        Self { record }
    }

    /// Verify a username/password pair, returning the matching record.
    pub fn verify(&self, username: &str, password: &str) -> Option<&CredentialRecord> {
        self.record
            .matches(username, password)
            .then_some(&self.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CredentialStore {
        CredentialStore::single(CredentialRecord::new(
            "user",
            "password",
            vec![Role::new("USER")],
        ))
    }

    #[test]
    fn verify_accepts_the_stored_pair() {
        let store = store();
        let record = store.verify("user", "password").unwrap();

        assert_eq!(record.username(), "user");
        assert_eq!(record.roles(), [Role::new("USER")]);
    }

    #[test]
    fn verify_rejects_wrong_password_and_unknown_user() {
        let store = store();

        assert!(store.verify("user", "wrong").is_none());
        assert!(store.verify("admin", "password").is_none());
    }

    #[test]
    fn verify_is_case_sensitive() {
        assert!(store().verify("User", "password").is_none());
        assert!(store().verify("user", "Password").is_none());
    }
}
