//! Interpreter configuration.
//!
//! Centralizes the constants shared by the full terminal and the command bar.
//! Help texts are loaded at compile time using `include_str!`.

use std::time::Duration;

// =============================================================================
// Help Texts (loaded at compile time)
// =============================================================================

/// Overview printed by `help` with no topic.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Usage for `help vault`.
pub const HELP_VAULT: &str = include_str!("../assets/text/help_vault.txt");

/// Usage for `help account`.
pub const HELP_ACCOUNT: &str = include_str!("../assets/text/help_account.txt");

/// Usage for `help search`.
pub const HELP_SEARCH: &str = include_str!("../assets/text/help_search.txt");

/// One-line summary printed by `help` in the command bar.
pub const BAR_HELP_TEXT: &str =
    "Available commands: exit, open [page], vault [action], account [action]";

// =============================================================================
// Timing
// =============================================================================

/// Delay between the confirmation entry of `open`/`exit` and the side effect,
/// so the message stays visible before the view changes.
pub const ACTION_DELAY: Duration = Duration::from_millis(500);

/// How long a command bar feedback entry stays visible.
pub const FEEDBACK_TIMEOUT: Duration = Duration::from_secs(3);

// =============================================================================
// Limits
// =============================================================================

/// Maximum number of suggestions offered for a partial input.
pub const MAX_SUGGESTIONS: usize = 5;

/// Number of recently modified accounts reported by `stats`.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

// =============================================================================
// Confirmation Tokens
// =============================================================================

/// Replies that execute a pending destructive operation.
pub const CONFIRM_WORDS: &[&str] = &["yes", "confirm"];

/// Replies that abandon a pending destructive operation.
pub const CANCEL_WORDS: &[&str] = &["cancel", "no"];
