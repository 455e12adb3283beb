//! In-memory [`VaultStore`] with snapshot support.
//!
//! Vaults and accounts live in two vectors whose insertion order is the
//! domain order. Hosts persist the store by serializing a [`Snapshot`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{
    Account, AccountId, AccountPatch, NewAccount, NewVault, Vault, VaultId, VaultPatch,
};
use crate::ports::VaultStore;

// =============================================================================
// Clock
// =============================================================================

/// Source of creation and modification timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn advance(&self, by: TimeDelta) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Serializable copy of a store's contents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub vaults: Vec<Vault>,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, StoreError> {
        serde_json::to_string(self).map_err(|e| StoreError::Backend(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        serde_json::from_str(json).map_err(|e| StoreError::Backend(e.to_string()))
    }
}

// =============================================================================
// Memory Store
// =============================================================================

pub struct MemoryStore {
    vaults: RefCell<Vec<Vault>>,
    accounts: RefCell<Vec<Account>>,
    clock: Box<dyn Clock>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Empty store stamped by the wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            vaults: RefCell::new(Vec::new()),
            accounts: RefCell::new(Vec::new()),
            clock: Box::new(clock),
        }
    }

    pub fn from_snapshot(snapshot: Snapshot, clock: impl Clock + 'static) -> Self {
        Self {
            vaults: RefCell::new(snapshot.vaults),
            accounts: RefCell::new(snapshot.accounts),
            clock: Box::new(clock),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            vaults: self.vaults.borrow().clone(),
            accounts: self.accounts.borrow().clone(),
        }
    }

    /// Replace the contents, keeping the clock.
    pub fn restore(&self, snapshot: Snapshot) {
        *self.vaults.borrow_mut() = snapshot.vaults;
        *self.accounts.borrow_mut() = snapshot.accounts;
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl VaultStore for MemoryStore {
    async fn list_vaults(&self) -> Result<Vec<Vault>, StoreError> {
        Ok(self.vaults.borrow().clone())
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, StoreError> {
        Ok(self.accounts.borrow().clone())
    }

    async fn create_vault(&self, vault: NewVault) -> Result<Vault, StoreError> {
        let now = self.clock.now();
        let created = Vault {
            id: VaultId::new(new_id()),
            name: vault.name,
            description: vault.description,
            created_at: now,
            modified_at: now,
        };
        self.vaults.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_vault(&self, id: &VaultId, patch: VaultPatch) -> Result<Vault, StoreError> {
        let mut vaults = self.vaults.borrow_mut();
        let vault = vaults
            .iter_mut()
            .find(|v| &v.id == id)
            .ok_or_else(|| StoreError::VaultNotFound(id.clone()))?;
        patch.apply(vault);
        vault.modified_at = self.clock.now();
        Ok(vault.clone())
    }

    async fn delete_vault(&self, id: &VaultId) -> Result<(), StoreError> {
        let mut vaults = self.vaults.borrow_mut();
        let before = vaults.len();
        vaults.retain(|v| &v.id != id);
        if vaults.len() == before {
            return Err(StoreError::VaultNotFound(id.clone()));
        }
        self.accounts.borrow_mut().retain(|a| &a.vault_id != id);
        Ok(())
    }

    async fn create_account(&self, account: NewAccount) -> Result<Account, StoreError> {
        if !self.vaults.borrow().iter().any(|v| v.id == account.vault_id) {
            return Err(StoreError::VaultNotFound(account.vault_id));
        }
        let now = self.clock.now();
        let created = Account {
            id: AccountId::new(new_id()),
            vault_id: account.vault_id,
            name: account.name,
            username: account.username,
            password: account.password,
            url: account.url,
            notes: account.notes,
            created_at: now,
            modified_at: now,
        };
        self.accounts.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_account(
        &self,
        id: &AccountId,
        patch: AccountPatch,
    ) -> Result<Account, StoreError> {
        let mut accounts = self.accounts.borrow_mut();
        let account = accounts
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or_else(|| StoreError::AccountNotFound(id.clone()))?;
        patch.apply(account);
        account.modified_at = self.clock.now();
        Ok(account.clone())
    }

    async fn delete_account(&self, id: &AccountId) -> Result<(), StoreError> {
        let mut accounts = self.accounts.borrow_mut();
        let before = accounts.len();
        accounts.retain(|a| &a.id != id);
        if accounts.len() == before {
            return Err(StoreError::AccountNotFound(id.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn clock() -> ManualClock {
        ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap())
    }

    fn new_vault(name: &str) -> NewVault {
        NewVault {
            name: name.to_string(),
            description: String::new(),
        }
    }

    fn new_account(vault_id: &VaultId, name: &str) -> NewAccount {
        NewAccount {
            vault_id: vault_id.clone(),
            name: name.to_string(),
            username: "user".to_string(),
            password: "pw".to_string(),
            url: String::new(),
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_ids_and_timestamps() {
        let clock = clock();
        let store = MemoryStore::with_clock(clock.clone());
        let a = store.create_vault(new_vault("A")).await.unwrap();
        let b = store.create_vault(new_vault("B")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, clock.now());
        assert_eq!(a.modified_at, a.created_at);

        let names: Vec<_> = store
            .list_vaults()
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[tokio::test]
    async fn test_update_bumps_modified_at() {
        let clock = clock();
        let store = MemoryStore::with_clock(clock.clone());
        let vault = store.create_vault(new_vault("A")).await.unwrap();

        clock.advance(TimeDelta::minutes(5));
        let patch = VaultPatch {
            description: Some("work stuff".into()),
            ..Default::default()
        };
        let updated = store.update_vault(&vault.id, patch).await.unwrap();

        assert_eq!(updated.name, "A");
        assert_eq!(updated.description, "work stuff");
        assert_eq!(updated.created_at, vault.created_at);
        assert_eq!(updated.modified_at, vault.created_at + TimeDelta::minutes(5));
    }

    #[tokio::test]
    async fn test_delete_vault_cascades() {
        let store = MemoryStore::with_clock(clock());
        let keep = store.create_vault(new_vault("Keep")).await.unwrap();
        let drop = store.create_vault(new_vault("Drop")).await.unwrap();
        store.create_account(new_account(&keep.id, "k1")).await.unwrap();
        store.create_account(new_account(&drop.id, "d1")).await.unwrap();
        store.create_account(new_account(&drop.id, "d2")).await.unwrap();

        store.delete_vault(&drop.id).await.unwrap();

        let accounts = store.list_accounts().await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].name, "k1");
    }

    #[tokio::test]
    async fn test_missing_ids_are_errors() {
        let store = MemoryStore::with_clock(clock());
        let ghost = VaultId::new("ghost");
        assert_eq!(
            store.delete_vault(&ghost).await,
            Err(StoreError::VaultNotFound(ghost.clone()))
        );
        assert!(matches!(
            store.create_account(new_account(&ghost, "x")).await,
            Err(StoreError::VaultNotFound(_))
        ));
        assert!(matches!(
            store.delete_account(&AccountId::new("nope")).await,
            Err(StoreError::AccountNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_snapshot_restores_contents() {
        let store = MemoryStore::with_clock(clock());
        let vault = store.create_vault(new_vault("A")).await.unwrap();
        store.create_account(new_account(&vault.id, "acc")).await.unwrap();

        let json = store.snapshot().to_json().unwrap();
        let restored = MemoryStore::from_snapshot(Snapshot::from_json(&json).unwrap(), clock());

        assert_eq!(restored.list_vaults().await.unwrap(), vec![vault]);
        assert_eq!(restored.list_accounts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_restore_replaces_contents() {
        let store = MemoryStore::with_clock(clock());
        let before = store.snapshot();
        let vault = store.create_vault(new_vault("A")).await.unwrap();
        store.create_account(new_account(&vault.id, "acc")).await.unwrap();

        store.restore(before);
        assert!(store.list_vaults().await.unwrap().is_empty());
        assert!(store.list_accounts().await.unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        assert!(matches!(
            Snapshot::from_json("not json"),
            Err(StoreError::Backend(_))
        ));
    }
}
