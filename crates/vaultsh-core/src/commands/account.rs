//! `account` handlers.

use tracing::{debug, info};

use crate::error::CommandError;
use crate::gate::PendingOperation;
use crate::models::{AccountPatch, AccountRow, NewAccount, Payload, ResultEntry};
use crate::parser::Flags;
use crate::ports::{Clipboard, VaultStore};

use super::{find_account, find_vault, plural, vault_name};

pub const CREATE_USAGE: &str = "account create --vault \"Vault Name\" --name \"Account Name\" --username \"user\" --password \"pass\" [--url \"https://...\"] [--notes \"notes\"]";
pub const UPDATE_USAGE: &str = "account update --name \"Account Name\" [--newname \"New Name\"] [--username \"user\"] [--password \"pass\"] [--url \"url\"] [--notes \"notes\"]";
pub const DELETE_USAGE: &str = "account delete --name \"Account Name\"";
pub const SHOW_USAGE: &str = "account show --name \"Account Name\" [--reveal]";
pub const PASSWORD_USAGE: &str = "account password --name \"Account Name\"";

/// All accounts, or those of `--vault`.
pub async fn list<S: VaultStore>(store: &S, flags: &Flags) -> Result<ResultEntry, CommandError> {
    let vaults = store.list_vaults().await?;
    let mut accounts = store.list_accounts().await?;

    if let Some(wanted) = flags.get("vault") {
        let vault =
            find_vault(&vaults, wanted).ok_or_else(|| CommandError::vault_not_found(wanted))?;
        accounts.retain(|a| a.vault_id == vault.id);
    }

    if accounts.is_empty() {
        return Ok(ResultEntry::info(
            "No accounts found. Use \"account create\" to create one.",
        ));
    }

    let rows: Vec<_> = accounts
        .iter()
        .map(|a| AccountRow::new(a, vault_name(&vaults, &a.vault_id)))
        .collect();

    Ok(
        ResultEntry::success(format!("Found {}:", plural(rows.len(), "account")))
            .with_payload(Payload::AccountList { accounts: rows }),
    )
}

pub async fn create<S: VaultStore>(store: &S, flags: &Flags) -> Result<ResultEntry, CommandError> {
    let (Some(vault), Some(name), Some(username), Some(password)) = (
        flags.get("vault"),
        flags.get("name"),
        flags.get("username"),
        flags.get("password"),
    ) else {
        return Err(CommandError::Usage(CREATE_USAGE));
    };

    let vaults = store.list_vaults().await?;
    let target = find_vault(&vaults, vault).ok_or_else(|| CommandError::vault_not_found(vault))?;

    let account = store
        .create_account(NewAccount {
            vault_id: target.id.clone(),
            name: name.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            url: flags.get("url").unwrap_or_default().to_string(),
            notes: flags.get("notes").unwrap_or_default().to_string(),
        })
        .await?;
    info!(account = %account.id, vault = %target.id, "account created");

    Ok(ResultEntry::success(format!(
        "Account \"{name}\" created successfully in vault \"{}\".",
        target.name
    )))
}

pub async fn update<S: VaultStore>(store: &S, flags: &Flags) -> Result<ResultEntry, CommandError> {
    let name = flags.get("name").ok_or(CommandError::Usage(UPDATE_USAGE))?;
    let accounts = store.list_accounts().await?;
    let account =
        find_account(&accounts, name).ok_or_else(|| CommandError::account_not_found(name))?;

    let field = |key: &str| flags.get(key).map(str::to_string);
    let patch = AccountPatch {
        name: field("newname"),
        username: field("username"),
        password: field("password"),
        url: field("url"),
        notes: field("notes"),
    };
    store.update_account(&account.id, patch).await?;
    info!(account = %account.id, "account updated");

    Ok(ResultEntry::success(format!(
        "Account \"{name}\" updated successfully."
    )))
}

/// Resolve the target of `account delete` without deleting anything.
pub async fn prepare_delete<S: VaultStore>(
    store: &S,
    flags: &Flags,
) -> Result<PendingOperation, CommandError> {
    let name = flags.get("name").ok_or(CommandError::Usage(DELETE_USAGE))?;
    let accounts = store.list_accounts().await?;
    let account =
        find_account(&accounts, name).ok_or_else(|| CommandError::account_not_found(name))?;

    Ok(PendingOperation::DeleteAccount {
        id: account.id.clone(),
        name: account.name.clone(),
    })
}

/// Account details. The password travels in the payload; masking it unless
/// `--reveal` was given is up to the renderer.
pub async fn show<S: VaultStore>(store: &S, flags: &Flags) -> Result<ResultEntry, CommandError> {
    let name = flags.get("name").ok_or(CommandError::Usage(SHOW_USAGE))?;
    let accounts = store.list_accounts().await?;
    let account =
        find_account(&accounts, name).ok_or_else(|| CommandError::account_not_found(name))?;
    let vaults = store.list_vaults().await?;

    Ok(
        ResultEntry::success(format!("Account: {}", account.name)).with_payload(
            Payload::AccountDetail {
                account: account.clone(),
                vault_name: vault_name(&vaults, &account.vault_id).map(str::to_string),
                reveal: flags.has("reveal"),
            },
        ),
    )
}

/// Show the plaintext password and copy it to the clipboard when one exists.
pub async fn password<S: VaultStore>(
    store: &S,
    flags: &Flags,
    clipboard: Option<&dyn Clipboard>,
) -> Result<ResultEntry, CommandError> {
    let name = flags.get("name").ok_or(CommandError::Usage(PASSWORD_USAGE))?;
    let accounts = store.list_accounts().await?;
    let account =
        find_account(&accounts, name).ok_or_else(|| CommandError::account_not_found(name))?;

    let note = match clipboard {
        Some(clipboard) => {
            clipboard.write_text(&account.password);
            debug!(account = %account.id, "password copied");
            "(Copied to clipboard)"
        }
        None => "(Clipboard unavailable)",
    };

    Ok(ResultEntry::success(format!(
        "Password for \"{}\": {}\n\n{note}",
        account.name, account.password
    )))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::models::{EntryKind, NewVault};
    use crate::parser::parse_line;
    use crate::store::MemoryStore;

    fn flags(input: &str) -> Flags {
        parse_line(input).unwrap().flags
    }

    async fn store_with_vault(name: &str) -> MemoryStore {
        let store = MemoryStore::new();
        store
            .create_vault(NewVault {
                name: name.to_string(),
                description: String::new(),
            })
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_create_requires_all_fields() {
        let store = store_with_vault("Personal").await;
        let err = create(
            &store,
            &flags("account create --vault Personal --name Gmail --username me"),
        )
        .await
        .unwrap_err();
        assert_eq!(err, CommandError::Usage(CREATE_USAGE));
    }

    #[tokio::test]
    async fn test_create_into_unknown_vault() {
        let store = store_with_vault("Personal").await;
        let err = create(
            &store,
            &flags("account create --vault Work --name Gmail --username me --password pw"),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Vault \"Work\" not found.");
        assert!(store.list_accounts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_uses_stored_vault_name() {
        let store = store_with_vault("My Vault").await;
        let entry = create(
            &store,
            &flags("account create --vault \"my vault\" --name Gmail --username a@b.com --password \"p@ss 1\""),
        )
        .await
        .unwrap();
        assert_eq!(
            entry.message,
            "Account \"Gmail\" created successfully in vault \"My Vault\"."
        );

        let accounts = store.list_accounts().await.unwrap();
        assert_eq!(accounts[0].password, "p@ss 1");
        assert_eq!(accounts[0].url, "");
    }

    #[tokio::test]
    async fn test_list_filtered_by_unknown_vault() {
        let store = store_with_vault("Personal").await;
        let err = list(&store, &flags("account list --vault Nope"))
            .await
            .unwrap_err();
        assert_eq!(err, CommandError::vault_not_found("Nope"));
    }

    #[tokio::test]
    async fn test_list_empty_is_info() {
        let store = store_with_vault("Personal").await;
        let entry = list(&store, &flags("account list")).await.unwrap();
        assert_eq!(entry.kind, EntryKind::Info);
        assert_eq!(
            entry.message,
            "No accounts found. Use \"account create\" to create one."
        );
        assert!(entry.payload.is_none());
    }

    #[tokio::test]
    async fn test_update_requires_name() {
        let store = store_with_vault("Personal").await;
        let err = update(&store, &flags("account update --username other"))
            .await
            .unwrap_err();
        assert_eq!(err, CommandError::Usage(UPDATE_USAGE));
    }

    #[tokio::test]
    async fn test_update_unknown_account() {
        let store = store_with_vault("Personal").await;
        let err = update(&store, &flags("account update --name Ghost --username x"))
            .await
            .unwrap_err();
        assert_eq!(err, CommandError::account_not_found("Ghost"));
    }

    #[tokio::test]
    async fn test_update_keeps_omitted_fields() {
        let store = store_with_vault("Personal").await;
        create(
            &store,
            &flags("account create --vault Personal --name Gmail --username me --password pw --url https://mail.google.com --notes main"),
        )
        .await
        .unwrap();

        let entry = update(
            &store,
            &flags("account update --name gmail --newname Mail --password new"),
        )
        .await
        .unwrap();
        assert_eq!(entry.message, "Account \"gmail\" updated successfully.");

        let account = &store.list_accounts().await.unwrap()[0];
        assert_eq!(account.name, "Mail");
        assert_eq!(account.password, "new");
        assert_eq!(account.username, "me");
        assert_eq!(account.url, "https://mail.google.com");
        assert_eq!(account.notes, "main");
    }

    #[tokio::test]
    async fn test_list_rows_carry_vault_name() {
        let store = store_with_vault("Personal").await;
        create(
            &store,
            &flags("account create --vault Personal --name Gmail --username me --password pw"),
        )
        .await
        .unwrap();

        let entry = list(&store, &flags("account list")).await.unwrap();
        assert_eq!(entry.message, "Found 1 account:");
        let Some(Payload::AccountList { accounts }) = entry.payload else {
            panic!("expected account list");
        };
        assert_eq!(accounts[0].vault_name.as_deref(), Some("Personal"));
    }

    #[tokio::test]
    async fn test_show_reveal_switch() {
        let store = store_with_vault("Personal").await;
        create(
            &store,
            &flags("account create --vault Personal --name Gmail --username me --password pw"),
        )
        .await
        .unwrap();

        let entry = show(&store, &flags("account show --name gmail --reveal"))
            .await
            .unwrap();
        let Some(Payload::AccountDetail { reveal, vault_name, .. }) = entry.payload else {
            panic!("expected account detail");
        };
        assert!(reveal);
        assert_eq!(vault_name.as_deref(), Some("Personal"));

        let entry = show(&store, &flags("account show --name gmail")).await.unwrap();
        assert!(matches!(
            entry.payload,
            Some(Payload::AccountDetail { reveal: false, .. })
        ));
    }

    #[tokio::test]
    async fn test_password_copies_to_clipboard() {
        let store = store_with_vault("Personal").await;
        create(
            &store,
            &flags("account create --vault Personal --name Gmail --username me --password s3cret"),
        )
        .await
        .unwrap();

        let copied = RefCell::new(Vec::new());
        let clipboard = |text: &str| copied.borrow_mut().push(text.to_string());

        let entry = password(&store, &flags("account password --name Gmail"), Some(&clipboard))
            .await
            .unwrap();
        assert_eq!(
            entry.message,
            "Password for \"Gmail\": s3cret\n\n(Copied to clipboard)"
        );
        assert_eq!(*copied.borrow(), vec!["s3cret".to_string()]);
    }

    #[tokio::test]
    async fn test_password_without_clipboard_still_shows_secret() {
        let store = store_with_vault("Personal").await;
        create(
            &store,
            &flags("account create --vault Personal --name Gmail --username me --password s3cret"),
        )
        .await
        .unwrap();

        let entry = password(&store, &flags("account password --name Gmail"), None)
            .await
            .unwrap();
        assert!(entry.message.contains("s3cret"));
        assert!(entry.message.ends_with("(Clipboard unavailable)"));
    }
}
