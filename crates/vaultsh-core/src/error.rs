//! Error types for the interpreter.
//!
//! - [`CommandError`] - everything a handler can reject a command with; the
//!   router turns each one into an error entry in the result log
//! - [`StoreError`] - failures reported by a [`VaultStore`](crate::VaultStore)

use std::fmt;

use thiserror::Error;

use crate::models::{AccountId, VaultId};

/// A collaborator the interpreter may be constructed without.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    Exit,
    Navigation,
    Clipboard,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exit => write!(f, "exit"),
            Self::Navigation => write!(f, "navigation"),
            Self::Clipboard => write!(f, "clipboard"),
        }
    }
}

/// Kind of entity a lookup was performed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Vault,
    Account,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vault => write!(f, "Vault"),
            Self::Account => write!(f, "Account"),
        }
    }
}

/// Reasons a submitted line produced an error entry instead of a result.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    /// Required flag missing; carries the expected invocation.
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// Case-insensitive name lookup found nothing.
    #[error("{kind} \"{name}\" not found.")]
    NotFound { kind: EntityKind, name: String },

    #[error("{}", unavailable_message(.0))]
    Unavailable(Capability),

    #[error("Unknown command: \"{0}\". Type \"help\" for available commands.")]
    UnknownCommand(String),

    /// Known verb, unknown or missing sub-verb.
    #[error("Unknown {domain} command. Use: {valid}")]
    UnknownAction {
        domain: &'static str,
        valid: &'static str,
    },

    #[error("No help available for \"{0}\". Try: vault, account, search")]
    UnknownTopic(String),

    #[error("Unknown page \"{0}\". Available pages: vaults, accounts, profile, overview")]
    UnknownPage(String),

    /// Input while a destructive operation awaits confirmation.
    #[error("Please type \"yes\" or \"confirm\" to proceed, or \"cancel\" to abort.")]
    ConfirmationRequired,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

fn unavailable_message(capability: &Capability) -> &'static str {
    match capability {
        Capability::Exit => "Cannot exit from this context.",
        Capability::Navigation => "Navigation not available in this context.",
        Capability::Clipboard => "Clipboard not available in this context.",
    }
}

impl CommandError {
    pub fn vault_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntityKind::Vault,
            name: name.into(),
        }
    }

    pub fn account_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntityKind::Account,
            name: name.into(),
        }
    }
}

/// Failures reported by the data store collaborator.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("vault {0} does not exist")]
    VaultNotFound(VaultId),

    #[error("account {0} does not exist")]
    AccountNotFound(AccountId),

    /// Any other backend failure (I/O, quota, serialization).
    #[error("{0}")]
    Backend(String),
}
