//! Prefix suggestions for the input buffer.

use crate::config::MAX_SUGGESTIONS;

/// Completable commands, in the order suggestions are offered.
pub const VOCABULARY: &[&str] = &[
    "help",
    "clear",
    "exit",
    "open vaults",
    "open accounts",
    "open profile",
    "open overview",
    "vault list",
    "vault create",
    "vault update",
    "vault delete",
    "vault show",
    "account list",
    "account create",
    "account update",
    "account delete",
    "account show",
    "account password",
    "search",
    "stats",
];

/// Vocabulary entries starting with `input`, ignoring case.
///
/// Blank input yields nothing. The input is not trimmed, so `"vault "`
/// only matches two-word entries.
pub fn suggest(input: &str) -> Vec<&'static str> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    let prefix = input.to_lowercase();
    VOCABULARY
        .iter()
        .copied()
        .filter(|entry| entry.starts_with(&prefix))
        .take(MAX_SUGGESTIONS)
        .collect()
}
