//! Persistent vault store for the browser host.
//!
//! [`BrowserStore`] wraps the core [`MemoryStore`] and writes vaults and
//! accounts back to a [`KeyValue`] backend after every successful mutation,
//! under the same keys the pages read them from. A mutation whose write
//! fails is rolled back, so memory and storage never disagree.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use vaultsh_core::{
    Account, AccountId, AccountPatch, MemoryStore, NewAccount, NewVault, Snapshot, StoreError,
    SystemClock, Vault, VaultId, VaultPatch, VaultStore,
};

use crate::config::{ACCOUNTS_KEY, DEFAULT_USER, PROFILE_KEY, VAULTS_KEY};

/// String key-value backend (localStorage in the browser).
pub trait KeyValue {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

fn read_json<T: DeserializeOwned>(backend: &dyn KeyValue, key: &str) -> Option<T> {
    let raw = backend.get(key)?;
    serde_json::from_str(&raw).ok()
}

fn write_json<T: Serialize>(
    backend: &dyn KeyValue,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(value).map_err(|e| StoreError::Backend(e.to_string()))?;
    backend.set(key, &json)
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub username: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            username: DEFAULT_USER.to_string(),
        }
    }
}

impl Profile {
    pub fn load(backend: &dyn KeyValue) -> Self {
        read_json(backend, PROFILE_KEY).unwrap_or_default()
    }
}

// ============================================================================
// BrowserStore
// ============================================================================

pub struct BrowserStore {
    inner: MemoryStore,
    backend: Box<dyn KeyValue>,
    on_change: Option<Box<dyn Fn()>>,
}

impl BrowserStore {
    /// Load whatever the backend holds. Missing or corrupt keys start empty.
    pub fn load(backend: impl KeyValue + 'static) -> Self {
        let snapshot = Snapshot {
            vaults: read_json(&backend, VAULTS_KEY).unwrap_or_default(),
            accounts: read_json(&backend, ACCOUNTS_KEY).unwrap_or_default(),
        };
        Self {
            inner: MemoryStore::from_snapshot(snapshot, SystemClock),
            backend: Box::new(backend),
            on_change: None,
        }
    }

    /// Called after every persisted mutation.
    pub fn on_change(mut self, listener: impl Fn() + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    /// Current contents, for rendering pages synchronously.
    pub fn snapshot(&self) -> Snapshot {
        self.inner.snapshot()
    }

    fn write(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        write_json(self.backend.as_ref(), VAULTS_KEY, &snapshot.vaults)?;
        write_json(self.backend.as_ref(), ACCOUNTS_KEY, &snapshot.accounts)
    }

    /// Apply `mutation`, then write the result. On a failed write the
    /// in-memory change is undone and the previous contents rewritten.
    async fn persisted<T>(
        &self,
        mutation: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        let before = self.inner.snapshot();
        let value = mutation.await?;

        if let Err(err) = self.write(&self.inner.snapshot()) {
            self.inner.restore(before.clone());
            // best effort; a half-written pair must not outlive the rollback
            let _ = self.write(&before);
            return Err(err);
        }

        if let Some(listener) = &self.on_change {
            listener();
        }
        Ok(value)
    }
}

impl VaultStore for BrowserStore {
    async fn list_vaults(&self) -> Result<Vec<Vault>, StoreError> {
        self.inner.list_vaults().await
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, StoreError> {
        self.inner.list_accounts().await
    }

    async fn create_vault(&self, vault: NewVault) -> Result<Vault, StoreError> {
        self.persisted(self.inner.create_vault(vault)).await
    }

    async fn update_vault(&self, id: &VaultId, patch: VaultPatch) -> Result<Vault, StoreError> {
        self.persisted(self.inner.update_vault(id, patch)).await
    }

    async fn delete_vault(&self, id: &VaultId) -> Result<(), StoreError> {
        self.persisted(self.inner.delete_vault(id)).await
    }

    async fn create_account(&self, account: NewAccount) -> Result<Account, StoreError> {
        self.persisted(self.inner.create_account(account)).await
    }

    async fn update_account(
        &self,
        id: &AccountId,
        patch: AccountPatch,
    ) -> Result<Account, StoreError> {
        self.persisted(self.inner.update_account(id, patch)).await
    }

    async fn delete_account(&self, id: &AccountId) -> Result<(), StoreError> {
        self.persisted(self.inner.delete_account(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MapBackend {
        items: Rc<RefCell<HashMap<String, String>>>,
        /// Rejects writes to this key while set
        failing: Rc<RefCell<Option<&'static str>>>,
    }

    impl KeyValue for MapBackend {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if *self.failing.borrow() == Some(key) {
                return Err(StoreError::Backend("quota exceeded".into()));
            }
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn new_vault(name: &str) -> NewVault {
        NewVault {
            name: name.to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_mutations_survive_reload() {
        let backend = MapBackend::default();
        let store = BrowserStore::load(backend.clone());
        let vault = store.create_vault(new_vault("Personal")).await.unwrap();
        store
            .create_account(NewAccount {
                vault_id: vault.id.clone(),
                name: "Gmail".into(),
                username: "me".into(),
                password: "pw".into(),
                url: String::new(),
                notes: String::new(),
            })
            .await
            .unwrap();

        let reloaded = BrowserStore::load(backend);
        let snapshot = reloaded.snapshot();
        assert_eq!(snapshot.vaults.len(), 1);
        assert_eq!(snapshot.vaults[0].name, "Personal");
        assert_eq!(snapshot.accounts[0].vault_id, vault.id);
    }

    #[tokio::test]
    async fn test_cascade_is_persisted() {
        let backend = MapBackend::default();
        let store = BrowserStore::load(backend.clone());
        let vault = store.create_vault(new_vault("Work")).await.unwrap();
        store
            .create_account(NewAccount {
                vault_id: vault.id.clone(),
                name: "Jira".into(),
                username: "me".into(),
                password: "pw".into(),
                url: String::new(),
                notes: String::new(),
            })
            .await
            .unwrap();
        store.delete_vault(&vault.id).await.unwrap();

        assert_eq!(backend.get(ACCOUNTS_KEY).as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_failed_mutation_does_not_notify() {
        let notified = Rc::new(Cell::new(0));
        let counter = Rc::clone(&notified);
        let store = BrowserStore::load(MapBackend::default())
            .on_change(move || counter.set(counter.get() + 1));

        store.create_vault(new_vault("A")).await.unwrap();
        let missing = VaultId::new("missing");
        assert!(store.delete_vault(&missing).await.is_err());
        assert_eq!(notified.get(), 1);
    }

    #[tokio::test]
    async fn test_failed_write_rolls_back() {
        let backend = MapBackend::default();
        let notified = Rc::new(Cell::new(0));
        let counter = Rc::clone(&notified);
        let store =
            BrowserStore::load(backend.clone()).on_change(move || counter.set(counter.get() + 1));
        let vault = store.create_vault(new_vault("Keep")).await.unwrap();

        *backend.failing.borrow_mut() = Some(ACCOUNTS_KEY);
        let err = store.delete_vault(&vault.id).await.unwrap_err();
        assert_eq!(err, StoreError::Backend("quota exceeded".into()));
        assert_eq!(store.snapshot().vaults, vec![vault.clone()]);
        assert_eq!(notified.get(), 1);

        *backend.failing.borrow_mut() = None;
        let reloaded = BrowserStore::load(backend);
        assert_eq!(reloaded.snapshot().vaults, vec![vault]);
    }

    #[test]
    fn test_corrupt_keys_start_empty() {
        let backend = MapBackend::default();
        backend.set(VAULTS_KEY, "not json").unwrap();
        assert!(BrowserStore::load(backend).snapshot().vaults.is_empty());
    }

    #[test]
    fn test_profile_defaults_to_guest() {
        let backend = MapBackend::default();
        assert_eq!(Profile::load(&backend).username, DEFAULT_USER);

        backend.set(PROFILE_KEY, r#"{"username":"alice"}"#).unwrap();
        assert_eq!(Profile::load(&backend).username, "alice");
    }
}
