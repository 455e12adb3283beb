//! Application configuration.
//!
//! Interpreter timings and texts live in `vaultsh_core::config`; this module
//! only holds what the browser host adds on top.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the prompt and header.
pub const APP_NAME: &str = "vaultsh";

/// Header subtitle.
pub const APP_TAGLINE: &str = "Password vaults, driven from a terminal";

/// Prompt user when no profile has been saved yet.
pub const DEFAULT_USER: &str = "guest";

// =============================================================================
// Storage Keys
// =============================================================================

/// localStorage key holding the JSON array of vaults.
pub const VAULTS_KEY: &str = "passwordmanager_vaults";

/// localStorage key holding the JSON array of accounts.
pub const ACCOUNTS_KEY: &str = "passwordmanager_accounts";

/// localStorage key holding the JSON profile.
pub const PROFILE_KEY: &str = "passwordmanager_profile";
