//! Plain-text rendering of result entries.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use vaultsh_core::{Account, AccountRow, EntryKind, Payload, ResultEntry, Vault};

const MASK: &str = "••••••••";
const NAME_WIDTH: usize = 20;

fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

/// Render one entry: a kind marker, the message, then its payload (if any).
pub fn entry(entry: &ResultEntry) -> String {
    let marker = match entry.kind {
        EntryKind::Success => "ok",
        EntryKind::Error => "error",
        EntryKind::Info => "--",
        EntryKind::Prompt => "??",
    };
    let mut out = format!("[{marker}] {}", entry.message);
    if let Some(payload) = &entry.payload {
        out.push('\n');
        out.push_str(&payload_text(payload));
    }
    out
}

fn payload_text(payload: &Payload) -> String {
    let mut out = String::new();
    match payload {
        Payload::VaultList { vaults } => vault_rows(&mut out, vaults),
        Payload::AccountList { accounts } => account_rows(&mut out, accounts),
        Payload::VaultDetail { vault, accounts } => {
            let _ = writeln!(out, "  Name:        {}", vault.name);
            let _ = writeln!(out, "  Description: {}", or_dash(&vault.description));
            let _ = writeln!(out, "  Created:     {}", timestamp(&vault.created_at));
            let _ = writeln!(out, "  Modified:    {}", timestamp(&vault.modified_at));
            let _ = writeln!(out, "  Accounts:    {}", accounts.len());
            account_rows(&mut out, accounts);
        }
        Payload::AccountDetail {
            account,
            vault_name,
            reveal,
        } => account_detail(&mut out, account, vault_name.as_deref(), *reveal),
        Payload::SearchResults { vaults, accounts } => {
            if !vaults.is_empty() {
                out.push_str("  Vaults:\n");
                vault_rows(&mut out, vaults);
            }
            if !accounts.is_empty() {
                out.push_str("  Accounts:\n");
                account_rows(&mut out, accounts);
            }
        }
        Payload::Stats {
            total_vaults,
            total_accounts,
            recent_accounts,
        } => {
            let _ = writeln!(out, "  Vaults:   {total_vaults}");
            let _ = writeln!(out, "  Accounts: {total_accounts}");
            if !recent_accounts.is_empty() {
                out.push_str("  Recently modified:\n");
                for row in recent_accounts {
                    let _ = writeln!(
                        out,
                        "    {:<NAME_WIDTH$} {}",
                        row.name,
                        timestamp(&row.modified_at)
                    );
                }
            }
        }
    }
    out.truncate(out.trim_end().len());
    out
}

fn vault_rows(out: &mut String, vaults: &[Vault]) {
    for vault in vaults {
        let _ = writeln!(
            out,
            "    {:<NAME_WIDTH$} {}",
            vault.name,
            or_dash(&vault.description)
        );
    }
}

fn account_rows(out: &mut String, accounts: &[AccountRow]) {
    for row in accounts {
        let _ = writeln!(
            out,
            "    {:<NAME_WIDTH$} {:<24} {}",
            row.name,
            or_dash(&row.username),
            row.vault_name.as_deref().unwrap_or("-")
        );
    }
}

fn account_detail(out: &mut String, account: &Account, vault: Option<&str>, reveal: bool) {
    let password = if reveal { account.password.as_str() } else { MASK };
    let _ = writeln!(out, "  Name:     {}", account.name);
    let _ = writeln!(out, "  Vault:    {}", vault.unwrap_or("-"));
    let _ = writeln!(out, "  Username: {}", or_dash(&account.username));
    let _ = writeln!(out, "  Password: {password}");
    let _ = writeln!(out, "  URL:      {}", or_dash(&account.url));
    let _ = writeln!(out, "  Notes:    {}", or_dash(&account.notes));
    let _ = writeln!(out, "  Modified: {}", timestamp(&account.modified_at));
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
