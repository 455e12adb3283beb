//! Command execution for the full terminal.

use tracing::debug;

use crate::error::{Capability, CommandError};
use crate::models::{Page, ResultEntry};
use crate::parser::Flags;
use crate::ports::{Collaborators, VaultStore};

use super::{AccountAction, Command, CommandResult, VaultAction, account, help, query, vault};

/// Run a parsed command and describe its follow-up.
///
/// Destructive actions come back as [`CommandResult::Confirm`]; exit and
/// navigation come back as requests so the caller can defer them.
pub async fn execute_command<S: VaultStore>(
    cmd: Command,
    flags: &Flags,
    store: &S,
    ports: &Collaborators,
) -> Result<CommandResult, CommandError> {
    debug!(?cmd, "dispatch");

    let result = match cmd {
        Command::Help(topic) => help::help(topic.as_deref())?.into(),
        Command::Clear => CommandResult::Clear,
        Command::Exit => {
            if ports.exit.is_none() {
                return Err(CommandError::Unavailable(Capability::Exit));
            }
            CommandResult::Exit(ResultEntry::info("Exiting CLI..."))
        }
        Command::Open(page) => {
            let page = resolve_page(page.as_deref(), ports)?;
            CommandResult::Navigate {
                entry: ResultEntry::success(format!("Opening {page} page...")),
                page,
            }
        }
        Command::Vault(action) => match action {
            VaultAction::List => vault::list(store).await?.into(),
            VaultAction::Create => vault::create(store, flags).await?.into(),
            VaultAction::Update => vault::update(store, flags).await?.into(),
            VaultAction::Delete => CommandResult::Confirm(vault::prepare_delete(store, flags).await?),
            VaultAction::Show => vault::show(store, flags).await?.into(),
        },
        Command::Account(action) => match action {
            AccountAction::List => account::list(store, flags).await?.into(),
            AccountAction::Create => account::create(store, flags).await?.into(),
            AccountAction::Update => account::update(store, flags).await?.into(),
            AccountAction::Delete => {
                CommandResult::Confirm(account::prepare_delete(store, flags).await?)
            }
            AccountAction::Show => account::show(store, flags).await?.into(),
            AccountAction::Password => {
                account::password(store, flags, ports.clipboard.as_deref())
                    .await?
                    .into()
            }
        },
        Command::Search(text) => query::search(store, &text).await?.into(),
        Command::Stats => query::stats(store).await?.into(),
    };
    Ok(result)
}

/// Validate an `open` target. Fails first when the host cannot navigate.
pub(crate) fn resolve_page(
    page: Option<&str>,
    ports: &Collaborators,
) -> Result<Page, CommandError> {
    if ports.navigator.is_none() {
        return Err(CommandError::Unavailable(Capability::Navigation));
    }
    let name = page.unwrap_or_default();
    Page::parse(name).ok_or_else(|| CommandError::UnknownPage(name.to_string()))
}
