//! The full terminal: parser, router, confirmation gate, history and
//! suggestions around one result log.

use std::mem;

use tracing::{debug, info, warn};

use crate::autocomplete::suggest;
use crate::commands::{Command, CommandResult, execute_command};
use crate::config::ACTION_DELAY;
use crate::error::CommandError;
use crate::gate::{ConfirmationGate, PendingOperation, Resolution};
use crate::history::{History, Recall};
use crate::log::ResultLog;
use crate::models::ResultEntry;
use crate::parser::parse_line;
use crate::ports::{Collaborators, VaultStore};

/// Interactive command interpreter.
///
/// Lines are processed one at a time, each to completion, in the order they
/// are submitted. All output goes to [`Interpreter::log`].
pub struct Interpreter<S> {
    store: S,
    ports: Collaborators,
    log: ResultLog,
    gate: ConfirmationGate,
    history: History,
    input: String,
    suggestions: Vec<&'static str>,
}

impl<S: VaultStore> Interpreter<S> {
    /// Interpreter without navigation, exit or clipboard access.
    pub fn new(store: S) -> Self {
        Self::with_collaborators(store, Collaborators::default())
    }

    pub fn with_collaborators(store: S, ports: Collaborators) -> Self {
        Self {
            store,
            ports,
            log: ResultLog::new(),
            gate: ConfirmationGate::new(),
            history: History::new(),
            input: String::new(),
            suggestions: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn log(&self) -> &ResultLog {
        &self.log
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn pending(&self) -> Option<&PendingOperation> {
        self.gate.pending()
    }

    pub fn is_awaiting_confirmation(&self) -> bool {
        self.gate.is_awaiting()
    }

    // =========================================================================
    // Input Buffer
    // =========================================================================

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn suggestions(&self) -> &[&'static str] {
        &self.suggestions
    }

    /// Replace the buffer and recompute suggestions.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.suggestions = suggest(&self.input);
    }

    /// Load the previous history entry into the buffer.
    pub fn recall_previous(&mut self) {
        let recalled = recall_text(self.history.previous());
        if let Some(text) = recalled {
            self.set_input(text);
        }
    }

    /// Load the next history entry, or empty the buffer past the newest.
    pub fn recall_next(&mut self) {
        let recalled = recall_text(self.history.next());
        if let Some(text) = recalled {
            self.set_input(text);
        }
    }

    /// Replace the buffer with the first suggestion. Returns whether
    /// anything was completed.
    pub fn complete(&mut self) -> bool {
        let Some(first) = self.suggestions.first() else {
            return false;
        };
        self.input = first.to_string();
        self.suggestions.clear();
        true
    }

    /// Submit and empty the buffer.
    pub async fn submit_input(&mut self) {
        let line = mem::take(&mut self.input);
        self.suggestions.clear();
        self.submit(&line).await;
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Process one line to completion. Blank lines are ignored.
    pub async fn submit(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        self.log.push(ResultEntry::echo(line));
        self.history.reset_cursor();

        if let Some(resolution) = self.gate.resolve(line) {
            self.resolve(line, resolution).await;
            return;
        }

        self.history.record(line);
        let Some(parsed) = parse_line(line) else {
            return;
        };

        let outcome = match Command::parse(&parsed) {
            Ok(cmd) => execute_command(cmd, &parsed.flags, &self.store, &self.ports).await,
            Err(err) => Err(err),
        };
        match outcome {
            Ok(result) => self.apply(result),
            Err(err) => self.push_error(err),
        }
    }

    async fn resolve(&mut self, line: &str, resolution: Resolution) {
        match resolution {
            Resolution::Execute(op) => {
                self.history.record(line);
                match op.execute(&self.store).await {
                    Ok(entry) => self.log.push(entry),
                    Err(err) => self.push_error(err),
                }
            }
            Resolution::Cancelled(op) => {
                self.history.record(line);
                info!(target_name = op.name(), "operation cancelled");
                self.log.push(ResultEntry::info("Operation cancelled."));
            }
            Resolution::Rejected => {
                debug!("reply rejected while awaiting confirmation");
                self.push_error(CommandError::ConfirmationRequired);
            }
        }
    }

    fn apply(&mut self, result: CommandResult) {
        match result {
            CommandResult::Output(entry) => self.log.push(entry),
            CommandResult::Clear => self.log.clear(),
            CommandResult::Exit(entry) => {
                self.log.push(entry);
                if let Some(exit) = self.ports.exit.clone() {
                    self.ports.defer(ACTION_DELAY, move || exit.exit());
                }
            }
            CommandResult::Navigate { entry, page } => {
                self.log.push(entry);
                if let Some(navigator) = self.ports.navigator.clone() {
                    self.ports
                        .defer(ACTION_DELAY, move || navigator.navigate(page));
                }
            }
            CommandResult::Confirm(op) => {
                self.log.push(ResultEntry::prompt(op.prompt_message()));
                self.gate.arm(op);
            }
        }
    }

    fn push_error(&mut self, err: CommandError) {
        if let CommandError::Store(store_err) = &err {
            warn!(error = %store_err, "store call failed");
        }
        self.log.push(err.into());
    }
}

fn recall_text(recall: Recall<'_>) -> Option<String> {
    match recall {
        Recall::Entry(text) => Some(text.to_string()),
        Recall::Cleared => Some(String::new()),
        Recall::Unchanged => None,
    }
}
