//! Read-only commands spanning both domains: `search` and `stats`.

use std::cmp::Reverse;

use crate::config::RECENT_ACTIVITY_LIMIT;
use crate::error::CommandError;
use crate::models::{AccountRow, Payload, ResultEntry};
use crate::ports::VaultStore;

use super::vault_name;

pub const SEARCH_USAGE: &str = "search <query>";

/// Case-insensitive substring search over vault name and description and
/// account name, username and url.
pub async fn search<S: VaultStore>(store: &S, query: &str) -> Result<ResultEntry, CommandError> {
    if query.is_empty() {
        return Err(CommandError::Usage(SEARCH_USAGE));
    }

    let needle = query.to_lowercase();
    let hit = |field: &str| field.to_lowercase().contains(&needle);

    let all_vaults = store.list_vaults().await?;
    let vaults: Vec<_> = all_vaults
        .iter()
        .filter(|v| hit(&v.name) || hit(&v.description))
        .cloned()
        .collect();
    let accounts: Vec<_> = store
        .list_accounts()
        .await?
        .iter()
        .filter(|a| hit(&a.name) || hit(&a.username) || hit(&a.url))
        .map(|a| AccountRow::new(a, vault_name(&all_vaults, &a.vault_id)))
        .collect();

    if vaults.is_empty() && accounts.is_empty() {
        return Ok(ResultEntry::info(format!("No results found for \"{query}\".")));
    }

    Ok(
        ResultEntry::success(format!("Search results for \"{query}\":"))
            .with_payload(Payload::SearchResults { vaults, accounts }),
    )
}

/// Totals plus the most recently modified accounts, newest first.
pub async fn stats<S: VaultStore>(store: &S) -> Result<ResultEntry, CommandError> {
    let vaults = store.list_vaults().await?;
    let mut accounts = store.list_accounts().await?;
    let total_accounts = accounts.len();

    // Stable: ties keep store order.
    accounts.sort_by_key(|a| Reverse(a.modified_at));
    let recent_accounts = accounts
        .iter()
        .take(RECENT_ACTIVITY_LIMIT)
        .map(|a| AccountRow::new(a, vault_name(&vaults, &a.vault_id)))
        .collect();

    Ok(
        ResultEntry::success("System Statistics").with_payload(Payload::Stats {
            total_vaults: vaults.len(),
            total_accounts,
            recent_accounts,
        }),
    )
}
