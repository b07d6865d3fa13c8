//! Runtime wrappers around static content oracles.
//!
//! These implementations expose `stash-core` oracle traits and bundle them
//! into an [`OracleManager`] so the runtime can build
//! [`stash_core::TransferEnv`] snapshots on demand. The data is immutable at
//! runtime; the player lives in the session worker and in repositories.
mod items;
mod store;

use std::sync::Arc;

use stash_content::ItemCatalog;
use stash_core::{Env, TransferEnv};

pub use items::ItemOracleImpl;
pub use store::StoreOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) items: Arc<ItemOracleImpl>,
    pub(crate) store: Arc<StoreOracleImpl>,
}

impl OracleManager {
    pub fn new(items: Arc<ItemOracleImpl>, store: Arc<StoreOracleImpl>) -> Self {
        Self { items, store }
    }

    /// Builds oracles from a loaded catalog.
    pub fn from_catalog(catalog: ItemCatalog) -> Self {
        let store = StoreOracleImpl::new(catalog.store);
        let items = catalog.items.into_iter().collect::<ItemOracleImpl>();
        Self::new(Arc::new(items), Arc::new(store))
    }

    /// Converts oracle manager into a TransferEnv for stash-core
    pub fn as_transfer_env(&self) -> TransferEnv<'_> {
        Env::with_all(self.items.as_ref(), self.store.as_ref()).as_transfer_env()
    }

    pub fn items(&self) -> &ItemOracleImpl {
        &self.items
    }

    pub fn store(&self) -> &StoreOracleImpl {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stash_core::{ItemClass, ItemDefinition, ItemHandle, ItemOracle, StoreOracle};

    #[test]
    fn catalog_becomes_oracles() {
        let catalog = ItemCatalog {
            items: vec![
                ItemDefinition::new(ItemHandle(3), "Club", ItemClass::Weapon),
                ItemDefinition::new(ItemHandle(1), "Knife", ItemClass::Weapon),
            ],
            store: vec![ItemHandle(1)],
        };

        let oracles = OracleManager::from_catalog(catalog);
        let env = oracles.as_transfer_env();

        assert_eq!(env.definition(ItemHandle(3)).unwrap().name, "Club");
        assert_eq!(env.store().unwrap().offer(0), Some(ItemHandle(1)));
        assert_eq!(env.store().unwrap().offer(1), None);
        let handles: Vec<_> = oracles
            .items()
            .all_definitions()
            .iter()
            .map(|def| def.handle)
            .collect();
        assert_eq!(handles, vec![ItemHandle(1), ItemHandle(3)]);
    }
}
