//! Confirmation gate for destructive operations.
//!
//! The gate is either idle or holds exactly one [`PendingOperation`]. While
//! an operation is pending, the next line is read as a reply instead of a
//! command:
//!
//! ```text
//!            vault/account delete
//!   Idle ───────────────────────────▶ Awaiting(op)
//!    ▲                                   │  │
//!    │   yes | confirm  (execute op)     │  │ anything else
//!    ├───────────────────────────────────┘  │ (re-prompt, keep op)
//!    │   cancel | no    (drop op)           ▼
//!    └────────────────────────────── Awaiting(op)
//! ```

use tracing::info;

use crate::config::{CANCEL_WORDS, CONFIRM_WORDS};
use crate::error::CommandError;
use crate::models::{AccountId, ResultEntry, VaultId};
use crate::ports::VaultStore;

// =============================================================================
// Pending Operation
// =============================================================================

/// A destructive operation waiting for an explicit reply.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingOperation {
    DeleteVault {
        id: VaultId,
        name: String,
        /// Accounts that go with the vault
        cascade: usize,
    },
    DeleteAccount {
        id: AccountId,
        name: String,
    },
}

impl PendingOperation {
    /// Prompt shown by the full terminal when the operation is armed.
    pub fn prompt_message(&self) -> String {
        match self {
            Self::DeleteVault { name, cascade, .. } => format!(
                "WARNING: Delete vault \"{name}\"? This will also delete {cascade} account(s). \
                 Type \"yes\" to confirm or \"cancel\" to abort."
            ),
            Self::DeleteAccount { name, .. } => format!(
                "Delete account \"{name}\"? Type \"yes\" to confirm or \"cancel\" to abort."
            ),
        }
    }

    /// Yes/no question asked by the command bar.
    pub fn question(&self) -> String {
        match self {
            Self::DeleteVault { name, .. } => {
                format!("Delete vault \"{name}\"? This action cannot be undone.")
            }
            Self::DeleteAccount { name, .. } => {
                format!("Delete account \"{name}\"? This action cannot be undone.")
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::DeleteVault { name, .. } | Self::DeleteAccount { name, .. } => name,
        }
    }

    /// Perform the deletion.
    pub async fn execute<S: VaultStore>(&self, store: &S) -> Result<ResultEntry, CommandError> {
        match self {
            Self::DeleteVault { id, name, cascade } => {
                store.delete_vault(id).await?;
                info!(vault = %id, cascade, "vault deleted");
                Ok(ResultEntry::success(format!(
                    "Vault \"{name}\" deleted successfully."
                )))
            }
            Self::DeleteAccount { id, name } => {
                store.delete_account(id).await?;
                info!(account = %id, "account deleted");
                Ok(ResultEntry::success(format!(
                    "Account \"{name}\" deleted successfully."
                )))
            }
        }
    }
}

// =============================================================================
// Replies
// =============================================================================

/// Classification of a line typed while an operation is pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reply {
    Confirm,
    Cancel,
    Other,
}

impl Reply {
    /// Classify a reply, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Self {
        let word = input.trim().to_lowercase();
        if CONFIRM_WORDS.contains(&word.as_str()) {
            Self::Confirm
        } else if CANCEL_WORDS.contains(&word.as_str()) {
            Self::Cancel
        } else {
            Self::Other
        }
    }
}

/// What the gate decided for a reply.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    /// Confirmed; the gate is idle again and the caller runs the operation.
    Execute(PendingOperation),
    /// Cancelled; the gate is idle again.
    Cancelled(PendingOperation),
    /// Neither; the operation stays pending.
    Rejected,
}

// =============================================================================
// Gate
// =============================================================================

#[derive(Clone, Debug, Default)]
pub struct ConfirmationGate {
    pending: Option<PendingOperation>,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `op` until the next reply.
    pub fn arm(&mut self, op: PendingOperation) {
        info!(target_name = op.name(), "awaiting confirmation");
        self.pending = Some(op);
    }

    pub fn is_awaiting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// Feed a reply. Returns `None` when nothing is pending.
    pub fn resolve(&mut self, input: &str) -> Option<Resolution> {
        let resolution = match Reply::parse(input) {
            Reply::Confirm => Resolution::Execute(self.pending.take()?),
            Reply::Cancel => Resolution::Cancelled(self.pending.take()?),
            Reply::Other if self.pending.is_some() => Resolution::Rejected,
            Reply::Other => return None,
        };
        Some(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delete_account() -> PendingOperation {
        PendingOperation::DeleteAccount {
            id: AccountId::new("a1"),
            name: "Gmail".to_string(),
        }
    }

    #[test]
    fn test_reply_parse() {
        assert_eq!(Reply::parse("yes"), Reply::Confirm);
        assert_eq!(Reply::parse("  CONFIRM "), Reply::Confirm);
        assert_eq!(Reply::parse("No"), Reply::Cancel);
        assert_eq!(Reply::parse("cancel"), Reply::Cancel);
        assert_eq!(Reply::parse("y"), Reply::Other);
        assert_eq!(Reply::parse("yes please"), Reply::Other);
    }

    #[test]
    fn test_idle_gate_ignores_replies() {
        let mut gate = ConfirmationGate::new();
        assert_eq!(gate.resolve("yes"), None);
        assert_eq!(gate.resolve("vault list"), None);
        assert!(!gate.is_awaiting());
    }

    #[test]
    fn test_reject_keeps_pending() {
        let mut gate = ConfirmationGate::new();
        gate.arm(delete_account());
        assert_eq!(gate.resolve("vault list"), Some(Resolution::Rejected));
        assert_eq!(gate.resolve("maybe"), Some(Resolution::Rejected));
        assert_eq!(gate.pending(), Some(&delete_account()));
    }

    #[test]
    fn test_confirm_and_cancel_return_to_idle() {
        let mut gate = ConfirmationGate::new();
        gate.arm(delete_account());
        assert_eq!(gate.resolve("YES"), Some(Resolution::Execute(delete_account())));
        assert!(!gate.is_awaiting());

        gate.arm(delete_account());
        assert_eq!(gate.resolve("no"), Some(Resolution::Cancelled(delete_account())));
        assert!(!gate.is_awaiting());
    }

    #[test]
    fn test_prompt_messages() {
        let vault = PendingOperation::DeleteVault {
            id: VaultId::new("v1"),
            name: "Work".to_string(),
            cascade: 3,
        };
        assert_eq!(
            vault.prompt_message(),
            "WARNING: Delete vault \"Work\"? This will also delete 3 account(s). \
             Type \"yes\" to confirm or \"cancel\" to abort."
        );
        assert_eq!(
            delete_account().question(),
            "Delete account \"Gmail\"? This action cannot be undone."
        );
    }
}
