//! Inline command bar: a reduced interpreter for quick actions.
//!
//! Shares the parser and handlers with [`Interpreter`](crate::Interpreter) but
//! keeps no history, offers no suggestions and has no confirmation gate.
//! Deletes ask the host's [`ConfirmPrompt`] instead. Output is a single
//! feedback entry, replaced by every command and cleared after
//! [`FEEDBACK_TIMEOUT`]. Under a scheduler that ignores delays the entry
//! stays until the next command replaces it.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};

use crate::commands::{
    AccountAction, VaultAction, Verb, account, find_account, resolve_page, vault,
};
use crate::config::{BAR_HELP_TEXT, FEEDBACK_TIMEOUT};
use crate::error::{Capability, CommandError};
use crate::gate::PendingOperation;
use crate::models::{Page, ResultEntry};
use crate::parser::{ParsedLine, parse_line};
use crate::ports::{Collaborators, ConfirmPrompt, VaultStore};

const VAULT_ACTIONS: &str = "create, delete";
const ACCOUNT_ACTIONS: &str = "create, delete, password";

#[derive(Debug, Default)]
struct Feedback {
    entry: Option<ResultEntry>,
    /// Bumped on every new entry so a stale timer cannot clear a newer one
    generation: u64,
}

pub struct CommandBar<S> {
    store: S,
    ports: Collaborators,
    confirm: Rc<dyn ConfirmPrompt>,
    feedback: Rc<RefCell<Feedback>>,
}

impl<S: VaultStore> CommandBar<S> {
    pub fn new(store: S, ports: Collaborators, confirm: impl ConfirmPrompt + 'static) -> Self {
        Self {
            store,
            ports,
            confirm: Rc::new(confirm),
            feedback: Rc::new(RefCell::new(Feedback::default())),
        }
    }

    /// Entry currently shown, if it has not timed out.
    pub fn feedback(&self) -> Option<ResultEntry> {
        self.feedback.borrow().entry.clone()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one line. A declined delete leaves the current feedback alone.
    pub async fn submit(&self, line: &str) {
        let Some(parsed) = parse_line(line) else {
            return;
        };

        match self.dispatch(&parsed).await {
            Ok(Some(entry)) => self.show(entry),
            Ok(None) => {}
            Err(err) => self.show(err.into()),
        }
    }

    async fn dispatch(&self, line: &ParsedLine) -> Result<Option<ResultEntry>, CommandError> {
        let unknown = || CommandError::UnknownCommand(line.verb.to_lowercase());
        let verb = Verb::parse(&line.verb).ok_or_else(unknown)?;
        let sub_verb = line.sub_verb.as_deref();
        let flags = &line.flags;
        debug!(?verb, "command bar dispatch");

        let entry = match verb {
            Verb::Exit => {
                self.navigate(Page::Overview)?;
                ResultEntry::info("Returning to overview...")
            }
            Verb::Open => {
                let page = resolve_page(sub_verb, &self.ports)?;
                self.navigate(page)?;
                ResultEntry::success(format!("Opening {page} page..."))
            }
            Verb::Help => ResultEntry::info(BAR_HELP_TEXT),
            Verb::Vault => match sub_verb.and_then(VaultAction::parse) {
                Some(VaultAction::Create) => vault::create(&self.store, flags).await?,
                Some(VaultAction::Delete) => {
                    let op = vault::prepare_delete(&self.store, flags).await?;
                    return self.confirm_and_execute(op).await;
                }
                _ => {
                    return Err(CommandError::UnknownAction {
                        domain: "vault",
                        valid: VAULT_ACTIONS,
                    });
                }
            },
            Verb::Account => match sub_verb.and_then(AccountAction::parse) {
                Some(AccountAction::Create) => account::create(&self.store, flags).await?,
                Some(AccountAction::Delete) => {
                    let op = account::prepare_delete(&self.store, flags).await?;
                    return self.confirm_and_execute(op).await;
                }
                Some(AccountAction::Password) => self.copy_password(line).await?,
                _ => {
                    return Err(CommandError::UnknownAction {
                        domain: "account",
                        valid: ACCOUNT_ACTIONS,
                    });
                }
            },
            Verb::Clear | Verb::Search | Verb::Stats => return Err(unknown()),
        };
        Ok(Some(entry))
    }

    fn navigate(&self, page: Page) -> Result<(), CommandError> {
        let navigator = self
            .ports
            .navigator
            .as_ref()
            .ok_or(CommandError::Unavailable(Capability::Navigation))?;
        navigator.navigate(page);
        Ok(())
    }

    async fn confirm_and_execute(
        &self,
        op: PendingOperation,
    ) -> Result<Option<ResultEntry>, CommandError> {
        if !self.confirm.confirm(&op.question()) {
            info!(target_name = op.name(), "delete declined");
            return Ok(None);
        }
        op.execute(&self.store).await.map(Some)
    }

    /// Copy without echoing the secret into the feedback line.
    async fn copy_password(&self, line: &ParsedLine) -> Result<ResultEntry, CommandError> {
        let name = line
            .flags
            .get("name")
            .ok_or(CommandError::Usage(account::PASSWORD_USAGE))?;
        let accounts = self.store.list_accounts().await?;
        let account =
            find_account(&accounts, name).ok_or_else(|| CommandError::account_not_found(name))?;
        let clipboard = self
            .ports
            .clipboard
            .as_ref()
            .ok_or(CommandError::Unavailable(Capability::Clipboard))?;

        clipboard.write_text(&account.password);
        Ok(ResultEntry::success(format!(
            "Password for \"{}\" copied to clipboard.",
            account.name
        )))
    }

    fn show(&self, entry: ResultEntry) {
        let generation = {
            let mut feedback = self.feedback.borrow_mut();
            feedback.generation += 1;
            feedback.entry = Some(entry);
            feedback.generation
        };
        if !self.ports.honors_delays() {
            return;
        }

        let slot = Rc::clone(&self.feedback);
        self.ports.defer(FEEDBACK_TIMEOUT, move || {
            let mut feedback = slot.borrow_mut();
            if feedback.generation == generation {
                feedback.entry = None;
            }
        });
    }
}
