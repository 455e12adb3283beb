//! `vault` handlers.

use tracing::info;

use crate::error::CommandError;
use crate::gate::PendingOperation;
use crate::models::{AccountRow, NewVault, Payload, ResultEntry, VaultPatch};
use crate::parser::Flags;
use crate::ports::VaultStore;

use super::{find_vault, plural};

pub const CREATE_USAGE: &str = "vault create --name \"Vault Name\" [--description \"Description\"]";
pub const UPDATE_USAGE: &str = "vault update --name \"Vault Name\" [--newname \"New Name\"] [--description \"New Description\"]";
pub const DELETE_USAGE: &str = "vault delete --name \"Vault Name\"";
pub const SHOW_USAGE: &str = "vault show --name \"Vault Name\"";

pub async fn list<S: VaultStore>(store: &S) -> Result<ResultEntry, CommandError> {
    let vaults = store.list_vaults().await?;
    if vaults.is_empty() {
        return Ok(ResultEntry::info(
            "No vaults found. Use \"vault create\" to create one.",
        ));
    }

    Ok(
        ResultEntry::success(format!("Found {}:", plural(vaults.len(), "vault")))
            .with_payload(Payload::VaultList { vaults }),
    )
}

pub async fn create<S: VaultStore>(store: &S, flags: &Flags) -> Result<ResultEntry, CommandError> {
    let name = flags.get("name").ok_or(CommandError::Usage(CREATE_USAGE))?;

    let vault = store
        .create_vault(NewVault {
            name: name.to_string(),
            description: flags.get("description").unwrap_or_default().to_string(),
        })
        .await?;
    info!(vault = %vault.id, "vault created");

    Ok(ResultEntry::success(format!(
        "Vault \"{name}\" created successfully."
    )))
}

pub async fn update<S: VaultStore>(store: &S, flags: &Flags) -> Result<ResultEntry, CommandError> {
    let name = flags.get("name").ok_or(CommandError::Usage(UPDATE_USAGE))?;
    let vaults = store.list_vaults().await?;
    let vault = find_vault(&vaults, name).ok_or_else(|| CommandError::vault_not_found(name))?;

    let patch = VaultPatch {
        name: flags.get("newname").map(str::to_string),
        description: flags.get("description").map(str::to_string),
    };
    store.update_vault(&vault.id, patch).await?;
    info!(vault = %vault.id, "vault updated");

    Ok(ResultEntry::success(format!(
        "Vault \"{name}\" updated successfully."
    )))
}

/// Resolve the target of `vault delete` without deleting anything.
pub async fn prepare_delete<S: VaultStore>(
    store: &S,
    flags: &Flags,
) -> Result<PendingOperation, CommandError> {
    let name = flags.get("name").ok_or(CommandError::Usage(DELETE_USAGE))?;
    let vaults = store.list_vaults().await?;
    let vault = find_vault(&vaults, name).ok_or_else(|| CommandError::vault_not_found(name))?;

    let cascade = store
        .list_accounts()
        .await?
        .iter()
        .filter(|a| a.vault_id == vault.id)
        .count();

    Ok(PendingOperation::DeleteVault {
        id: vault.id.clone(),
        name: vault.name.clone(),
        cascade,
    })
}

pub async fn show<S: VaultStore>(store: &S, flags: &Flags) -> Result<ResultEntry, CommandError> {
    let name = flags.get("name").ok_or(CommandError::Usage(SHOW_USAGE))?;
    let vaults = store.list_vaults().await?;
    let vault = find_vault(&vaults, name).ok_or_else(|| CommandError::vault_not_found(name))?;

    let accounts = store
        .list_accounts()
        .await?
        .iter()
        .filter(|a| a.vault_id == vault.id)
        .map(|a| AccountRow::new(a, Some(&vault.name)))
        .collect();

    Ok(
        ResultEntry::success(format!("Vault: {}", vault.name)).with_payload(Payload::VaultDetail {
            vault: vault.clone(),
            accounts,
        }),
    )
}
