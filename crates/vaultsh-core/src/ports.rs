//! Capabilities the interpreter borrows from its host.
//!
//! Only [`VaultStore`] is required. Navigation, exit and clipboard access are
//! optional; commands that need a missing one fail with
//! [`CommandError::Unavailable`](crate::CommandError::Unavailable) instead of
//! panicking. Closures implement the synchronous traits, which keeps test
//! doubles short.

use std::rc::Rc;
use std::time::Duration;

use crate::error::StoreError;
use crate::models::{
    Account, AccountId, AccountPatch, NewAccount, NewVault, Page, Vault, VaultId, VaultPatch,
};

// =============================================================================
// Data Store
// =============================================================================

/// Persistent vault and account storage.
///
/// Listing order is the domain order used for name lookups and output.
/// Deleting a vault also deletes its accounts.
#[allow(async_fn_in_trait)]
pub trait VaultStore {
    async fn list_vaults(&self) -> Result<Vec<Vault>, StoreError>;
    async fn list_accounts(&self) -> Result<Vec<Account>, StoreError>;
    async fn create_vault(&self, vault: NewVault) -> Result<Vault, StoreError>;
    async fn update_vault(&self, id: &VaultId, patch: VaultPatch) -> Result<Vault, StoreError>;
    async fn delete_vault(&self, id: &VaultId) -> Result<(), StoreError>;
    async fn create_account(&self, account: NewAccount) -> Result<Account, StoreError>;
    async fn update_account(
        &self,
        id: &AccountId,
        patch: AccountPatch,
    ) -> Result<Account, StoreError>;
    async fn delete_account(&self, id: &AccountId) -> Result<(), StoreError>;
}

impl<T: VaultStore> VaultStore for Rc<T> {
    async fn list_vaults(&self) -> Result<Vec<Vault>, StoreError> {
        (**self).list_vaults().await
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, StoreError> {
        (**self).list_accounts().await
    }

    async fn create_vault(&self, vault: NewVault) -> Result<Vault, StoreError> {
        (**self).create_vault(vault).await
    }

    async fn update_vault(&self, id: &VaultId, patch: VaultPatch) -> Result<Vault, StoreError> {
        (**self).update_vault(id, patch).await
    }

    async fn delete_vault(&self, id: &VaultId) -> Result<(), StoreError> {
        (**self).delete_vault(id).await
    }

    async fn create_account(&self, account: NewAccount) -> Result<Account, StoreError> {
        (**self).create_account(account).await
    }

    async fn update_account(
        &self,
        id: &AccountId,
        patch: AccountPatch,
    ) -> Result<Account, StoreError> {
        (**self).update_account(id, patch).await
    }

    async fn delete_account(&self, id: &AccountId) -> Result<(), StoreError> {
        (**self).delete_account(id).await
    }
}

// =============================================================================
// Host Capabilities
// =============================================================================

/// Switches the application view.
pub trait Navigator {
    fn navigate(&self, page: Page);
}

/// Leaves the terminal.
pub trait ExitHandler {
    fn exit(&self);
}

/// Writes text to the system clipboard. Failures are the host's concern.
pub trait Clipboard {
    fn write_text(&self, text: &str);
}

/// Synchronous yes/no question, used by the command bar before deleting.
pub trait ConfirmPrompt {
    fn confirm(&self, question: &str) -> bool;
}

/// Runs a task once after a delay.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);

    /// True when `schedule` runs the task before returning.
    fn runs_immediately(&self) -> bool {
        false
    }
}

impl<F: Fn(Page)> Navigator for F {
    fn navigate(&self, page: Page) {
        self(page)
    }
}

impl<F: Fn()> ExitHandler for F {
    fn exit(&self) {
        self()
    }
}

impl<F: Fn(&str)> Clipboard for F {
    fn write_text(&self, text: &str) {
        self(text)
    }
}

impl<F: Fn(&str) -> bool> ConfirmPrompt for F {
    fn confirm(&self, question: &str) -> bool {
        self(question)
    }
}

/// Runs every task right away, ignoring the delay.
///
/// Suits hosts without a visible transition, such as a line-oriented REPL.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateScheduler;

impl Scheduler for ImmediateScheduler {
    fn schedule(&self, _delay: Duration, task: Box<dyn FnOnce()>) {
        task();
    }

    fn runs_immediately(&self) -> bool {
        true
    }
}

// =============================================================================
// Collaborator Set
// =============================================================================

/// Optional host capabilities handed to an interpreter at construction.
#[derive(Clone)]
pub struct Collaborators {
    pub navigator: Option<Rc<dyn Navigator>>,
    pub exit: Option<Rc<dyn ExitHandler>>,
    pub clipboard: Option<Rc<dyn Clipboard>>,
    pub scheduler: Rc<dyn Scheduler>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            navigator: None,
            exit: None,
            clipboard: None,
            scheduler: Rc::new(ImmediateScheduler),
        }
    }
}

impl Collaborators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.navigator = Some(Rc::new(navigator));
        self
    }

    pub fn with_exit(mut self, exit: impl ExitHandler + 'static) -> Self {
        self.exit = Some(Rc::new(exit));
        self
    }

    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Some(Rc::new(clipboard));
        self
    }

    pub fn with_scheduler(mut self, scheduler: impl Scheduler + 'static) -> Self {
        self.scheduler = Rc::new(scheduler);
        self
    }

    /// Whether deferred tasks actually wait for their delay.
    pub(crate) fn honors_delays(&self) -> bool {
        !self.scheduler.runs_immediately()
    }

    /// Run `task` after `delay` through the configured scheduler.
    pub(crate) fn defer(&self, delay: Duration, task: impl FnOnce() + 'static) {
        self.scheduler.schedule(delay, Box::new(task));
    }
}
