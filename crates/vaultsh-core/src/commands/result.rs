//! Command execution result type.

use crate::gate::PendingOperation;
use crate::models::{Page, ResultEntry};

/// Result of executing a command.
///
/// Handlers never touch the log, the gate or host capabilities directly; they
/// describe the follow-up and the front end applies it.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandResult {
    /// Append this entry.
    Output(ResultEntry),
    /// Empty the result log.
    Clear,
    /// Append this entry, then leave the terminal.
    Exit(ResultEntry),
    /// Append this entry, then switch views.
    Navigate { entry: ResultEntry, page: Page },
    /// Hold this destructive operation until it is confirmed.
    Confirm(PendingOperation),
}

impl From<ResultEntry> for CommandResult {
    fn from(entry: ResultEntry) -> Self {
        Self::Output(entry)
    }
}
