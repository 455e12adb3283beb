//! Result log entries and the structured payloads they may carry.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::entity::{Account, AccountId, Vault};
use crate::error::CommandError;

/// Severity of a result entry, used by hosts for styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Command completed (green)
    Success,
    /// Command rejected or failed (red)
    Error,
    /// Neutral message, echoes, empty results (yellow)
    Info,
    /// A question waiting for a yes/cancel reply
    Prompt,
}

/// A single entry in the result log with a unique ID.
#[derive(Clone, Debug, Serialize)]
pub struct ResultEntry {
    /// Unique ID for keying rendered rows
    pub id: usize,
    pub kind: EntryKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
}

/// Account summary for listings. Never carries the password.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRow {
    pub id: AccountId,
    pub name: String,
    pub username: String,
    pub url: String,
    /// Owning vault, when it could be resolved
    pub vault_name: Option<String>,
    pub modified_at: DateTime<Utc>,
}

impl AccountRow {
    pub fn new(account: &Account, vault_name: Option<&str>) -> Self {
        Self {
            id: account.id.clone(),
            name: account.name.clone(),
            username: account.username.clone(),
            url: account.url.clone(),
            vault_name: vault_name.map(str::to_string),
            modified_at: account.modified_at,
        }
    }
}

/// Structured data attached to a success entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Payload {
    VaultList {
        vaults: Vec<Vault>,
    },
    AccountList {
        accounts: Vec<AccountRow>,
    },
    VaultDetail {
        vault: Vault,
        accounts: Vec<AccountRow>,
    },
    /// Full account; the renderer masks the password unless `reveal` is set.
    AccountDetail {
        account: Account,
        vault_name: Option<String>,
        reveal: bool,
    },
    SearchResults {
        vaults: Vec<Vault>,
        accounts: Vec<AccountRow>,
    },
    Stats {
        total_vaults: usize,
        total_accounts: usize,
        recent_accounts: Vec<AccountRow>,
    },
}

// Global counter for generating unique IDs
static RESULT_ENTRY_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl ResultEntry {
    fn new(kind: EntryKind, message: String) -> Self {
        Self {
            id: RESULT_ENTRY_COUNTER.fetch_add(1, Ordering::Relaxed),
            kind,
            message,
            payload: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(EntryKind::Success, message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(EntryKind::Error, message.into())
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(EntryKind::Info, message.into())
    }

    pub fn prompt(message: impl Into<String>) -> Self {
        Self::new(EntryKind::Prompt, message.into())
    }

    /// Echo of a submitted line, rendered like a shell transcript.
    pub fn echo(line: &str) -> Self {
        Self::info(format!("> {line}"))
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn is_error(&self) -> bool {
        self.kind == EntryKind::Error
    }
}

impl PartialEq for ResultEntry {
    fn eq(&self, other: &Self) -> bool {
        // Only compare content, not ID
        self.kind == other.kind && self.message == other.message && self.payload == other.payload
    }
}

impl From<CommandError> for ResultEntry {
    fn from(err: CommandError) -> Self {
        Self::error(err.to_string())
    }
}
