//! Data models shared by the interpreter and its hosts.
//!
//! Contains:
//! - [`Vault`], [`Account`] and their store inputs - records owned by the data store
//! - [`ResultEntry`], [`Payload`] - the interpreter's output
//! - [`Page`] - views reachable with `open`

mod entity;
mod output;
mod page;

pub use entity::{
    Account, AccountId, AccountPatch, NewAccount, NewVault, Vault, VaultId, VaultPatch,
};
pub use output::{AccountRow, EntryKind, Payload, ResultEntry};
pub use page::Page;
