//! Command dispatch types and domain handlers.
//!
//! [`Command::parse`] maps a [`ParsedLine`] onto the closed set of verbs and
//! actions; [`execute_command`] runs it against the store and reports what
//! the caller should do next as a [`CommandResult`].

pub mod account;
mod execute;
pub mod help;
pub mod query;
mod result;
pub mod vault;

pub use execute::execute_command;
pub(crate) use execute::resolve_page;
pub use result::CommandResult;

use crate::error::CommandError;
use crate::models::{Account, Vault, VaultId};
use crate::parser::ParsedLine;

// =============================================================================
// Verbs and Actions
// =============================================================================

/// First word of a command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    Help,
    Clear,
    Exit,
    Open,
    Vault,
    Account,
    Search,
    Stats,
}

impl Verb {
    /// Look up a verb or alias, ignoring case.
    pub fn parse(word: &str) -> Option<Self> {
        let verb = match word.to_lowercase().as_str() {
            "help" | "--help" | "-h" => Self::Help,
            "clear" => Self::Clear,
            "exit" | "quit" => Self::Exit,
            "open" => Self::Open,
            "vault" => Self::Vault,
            "account" => Self::Account,
            "search" => Self::Search,
            "stats" => Self::Stats,
            _ => return None,
        };
        Some(verb)
    }
}

/// `vault <action>`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VaultAction {
    List,
    Create,
    Update,
    Delete,
    Show,
}

impl VaultAction {
    pub const VALID: &'static str = "list, create, update, delete, show";

    pub fn parse(word: &str) -> Option<Self> {
        let action = match word.to_lowercase().as_str() {
            "list" | "ls" => Self::List,
            "create" => Self::Create,
            "update" => Self::Update,
            "delete" | "rm" => Self::Delete,
            "show" => Self::Show,
            _ => return None,
        };
        Some(action)
    }
}

/// `account <action>`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountAction {
    List,
    Create,
    Update,
    Delete,
    Show,
    Password,
}

impl AccountAction {
    pub const VALID: &'static str = "list, create, update, delete, show, password";

    pub fn parse(word: &str) -> Option<Self> {
        let action = match word.to_lowercase().as_str() {
            "list" | "ls" => Self::List,
            "create" => Self::Create,
            "update" => Self::Update,
            "delete" | "rm" => Self::Delete,
            "show" => Self::Show,
            "password" => Self::Password,
            _ => return None,
        };
        Some(action)
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// `help [topic]`, topic lowercased
    Help(Option<String>),
    Clear,
    Exit,
    /// `open <page>`, page as typed
    Open(Option<String>),
    Vault(VaultAction),
    Account(AccountAction),
    /// `search <query>`, query verbatim
    Search(String),
    Stats,
}

impl Command {
    /// Resolve the verb and sub-verb of a parsed line.
    pub fn parse(line: &ParsedLine) -> Result<Self, CommandError> {
        let verb = Verb::parse(&line.verb)
            .ok_or_else(|| CommandError::UnknownCommand(line.verb.to_lowercase()))?;
        let sub_verb = line.sub_verb.as_deref();

        let command = match verb {
            Verb::Help => Self::Help(sub_verb.map(str::to_lowercase)),
            Verb::Clear => Self::Clear,
            Verb::Exit => Self::Exit,
            Verb::Open => Self::Open(sub_verb.map(str::to_string)),
            Verb::Vault => Self::Vault(sub_verb.and_then(VaultAction::parse).ok_or(
                CommandError::UnknownAction {
                    domain: "vault",
                    valid: VaultAction::VALID,
                },
            )?),
            Verb::Account => Self::Account(sub_verb.and_then(AccountAction::parse).ok_or(
                CommandError::UnknownAction {
                    domain: "account",
                    valid: AccountAction::VALID,
                },
            )?),
            Verb::Search => Self::Search(line.remainder.clone()),
            Verb::Stats => Self::Stats,
        };
        Ok(command)
    }
}

// =============================================================================
// Lookup Helpers
// =============================================================================

/// First vault whose name matches, ignoring case.
pub(crate) fn find_vault<'a>(vaults: &'a [Vault], name: &str) -> Option<&'a Vault> {
    vaults.iter().find(|v| v.is_named(name))
}

/// First account whose name matches, ignoring case.
pub(crate) fn find_account<'a>(accounts: &'a [Account], name: &str) -> Option<&'a Account> {
    accounts.iter().find(|a| a.is_named(name))
}

/// Display name of the vault with `id`.
pub(crate) fn vault_name<'a>(vaults: &'a [Vault], id: &VaultId) -> Option<&'a str> {
    vaults
        .iter()
        .find(|v| &v.id == id)
        .map(|v| v.name.as_str())
}

/// `"1 vault"`, `"3 vaults"`
pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;

    fn parse(input: &str) -> Result<Command, CommandError> {
        Command::parse(&parse_line(input).unwrap())
    }

    #[test]
    fn test_aliases() {
        assert_eq!(parse("quit"), Ok(Command::Exit));
        assert_eq!(parse("-h"), Ok(Command::Help(None)));
        assert_eq!(parse("--HELP vault"), Ok(Command::Help(Some("vault".into()))));
        assert_eq!(parse("vault rm --name X"), Ok(Command::Vault(VaultAction::Delete)));
        assert_eq!(parse("ACCOUNT LS"), Ok(Command::Account(AccountAction::List)));
    }

    #[test]
    fn test_unknown_verb_is_named() {
        assert_eq!(
            parse("Frobnicate now"),
            Err(CommandError::UnknownCommand("frobnicate".into()))
        );
    }

    #[test]
    fn test_unknown_or_missing_action() {
        let err = parse("vault explode").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown vault command. Use: list, create, update, delete, show"
        );
        let err = parse("account").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown account command. Use: list, create, update, delete, show, password"
        );
    }

    #[test]
    fn test_search_keeps_remainder() {
        assert_eq!(
            parse("search  My Work  "),
            Ok(Command::Search("My Work".into()))
        );
        assert_eq!(parse("search"), Ok(Command::Search(String::new())));
    }

    #[test]
    fn test_open_keeps_page_text() {
        assert_eq!(parse("open Vaults"), Ok(Command::Open(Some("Vaults".into()))));
        assert_eq!(parse("open"), Ok(Command::Open(None)));
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "vault"), "1 vault");
        assert_eq!(plural(0, "account"), "0 accounts");
        assert_eq!(plural(2, "vault"), "2 vaults");
    }
}
