//! Vault and account records handed over by the data store.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Identifiers
// =============================================================================

/// Store-assigned identifier of a vault.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VaultId(String);

/// Store-assigned identifier of an account.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

macro_rules! impl_id {
    ($ty:ident) => {
        impl $ty {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $ty {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

impl_id!(VaultId);
impl_id!(AccountId);

// =============================================================================
// Entities
// =============================================================================

/// A named group of accounts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vault {
    pub id: VaultId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// A stored credential.
///
/// `Debug` never prints the password.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub vault_id: VaultId,
    pub name: String,
    pub username: String,
    pub password: String,
    pub url: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("vault_id", &self.vault_id)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("url", &self.url)
            .field("modified_at", &self.modified_at)
            .finish_non_exhaustive()
    }
}

/// Case-insensitive exact name comparison used by every lookup.
fn name_matches(candidate: &str, wanted: &str) -> bool {
    candidate.to_lowercase() == wanted.to_lowercase()
}

impl Vault {
    pub fn is_named(&self, name: &str) -> bool {
        name_matches(&self.name, name)
    }
}

impl Account {
    pub fn is_named(&self, name: &str) -> bool {
        name_matches(&self.name, name)
    }
}

// =============================================================================
// Store Inputs
// =============================================================================

/// Fields for a vault about to be created; the store assigns id and timestamps.
#[derive(Clone, Debug, PartialEq)]
pub struct NewVault {
    pub name: String,
    pub description: String,
}

/// Fields for an account about to be created.
#[derive(Clone, PartialEq)]
pub struct NewAccount {
    pub vault_id: VaultId,
    pub name: String,
    pub username: String,
    pub password: String,
    pub url: String,
    pub notes: String,
}

impl fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("vault_id", &self.vault_id)
            .field("name", &self.name)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Partial vault update. `None` leaves a field untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VaultPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl VaultPatch {
    pub fn apply(self, vault: &mut Vault) {
        if let Some(name) = self.name {
            vault.name = name;
        }
        if let Some(description) = self.description {
            vault.description = description;
        }
    }
}

/// Partial account update. `None` leaves a field untouched.
#[derive(Clone, Default, PartialEq)]
pub struct AccountPatch {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
}

impl AccountPatch {
    pub fn apply(self, account: &mut Account) {
        if let Some(name) = self.name {
            account.name = name;
        }
        if let Some(username) = self.username {
            account.username = username;
        }
        if let Some(password) = self.password {
            account.password = password;
        }
        if let Some(url) = self.url {
            account.url = url;
        }
        if let Some(notes) = self.notes {
            account.notes = notes;
        }
    }
}

impl fmt::Debug for AccountPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountPatch")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("url", &self.url)
            .field("notes", &self.notes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        let now = Utc::now();
        Account {
            id: AccountId::new("a1"),
            vault_id: VaultId::new("v1"),
            name: "Gmail".to_string(),
            username: "me@example.com".to_string(),
            password: "hunter2".to_string(),
            url: String::new(),
            notes: String::new(),
            created_at: now,
            modified_at: now,
        }
    }

    #[test]
    fn test_names_match_ignoring_case() {
        assert!(name_matches("PERSONAL", "Personal"));
        assert!(account().is_named("gmail"));
        assert!(!account().is_named("Gmai"));
    }

    #[test]
    fn test_account_debug_redacts_password() {
        let debug = format!("{:?}", account());
        assert!(debug.contains("Gmail"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_account_patch_applies_only_given_fields() {
        let mut acc = account();
        AccountPatch {
            password: Some("s3cret".to_string()),
            ..Default::default()
        }
        .apply(&mut acc);

        assert_eq!(acc.password, "s3cret");
        assert_eq!(acc.name, "Gmail");
        assert_eq!(acc.username, "me@example.com");
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&account()).unwrap();
        assert!(json.contains("\"vaultId\":\"v1\""));
        assert!(json.contains("\"modifiedAt\""));
    }
}
