//! Command interpreter for the vault terminal.
//!
//! This crate provides:
//! - [`parse_line`] turning a raw line into a verb, sub-verb and [`Flags`]
//! - [`Command`] dispatch over navigation, vault, account, search and stats
//! - [`ConfirmationGate`] guarding destructive operations behind a yes/cancel turn
//! - [`History`] recall and [`suggest`] prefix completion
//! - [`Interpreter`], the full terminal, and [`CommandBar`], the reduced inline variant
//!
//! # Architecture
//!
//! Both front ends share the parser and the handlers in [`commands`]. All
//! storage, navigation, clipboard and timer access goes through the narrow
//! traits in [`ports`], so hosts (and tests) plug in their own capabilities.
//! Output is an append-only [`ResultLog`] of [`ResultEntry`] values for a host
//! UI to render.

mod autocomplete;
mod command_bar;
pub mod commands;
pub mod config;
pub mod error;
mod gate;
mod history;
mod interpreter;
mod log;
pub mod models;
pub mod parser;
pub mod ports;
pub mod store;

pub use autocomplete::{VOCABULARY, suggest};
pub use command_bar::CommandBar;
pub use commands::{Command, CommandResult};
pub use error::{Capability, CommandError, StoreError};
pub use gate::{ConfirmationGate, PendingOperation, Reply, Resolution};
pub use history::{History, Recall};
pub use interpreter::Interpreter;
pub use log::ResultLog;
pub use models::{
    Account, AccountId, AccountPatch, AccountRow, EntryKind, NewAccount, NewVault, Page, Payload,
    ResultEntry, Vault, VaultId, VaultPatch,
};
pub use parser::{Flags, ParsedLine, parse_line};
pub use ports::{
    Clipboard, Collaborators, ConfirmPrompt, ExitHandler, ImmediateScheduler, Navigator, Scheduler,
    VaultStore,
};
pub use store::{Clock, ManualClock, MemoryStore, Snapshot, SystemClock};
