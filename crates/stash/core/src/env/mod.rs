//! Traits describing read-only item data.
//!
//! Oracles expose the static item catalog and the store's offer list. The
//! [`Env`] aggregate bundles them so the engine can access everything it needs
//! without hard coupling to concrete implementations.
mod error;
mod items;
mod store;

pub use error::OracleError;
pub use items::{
    ArmorType, ItemClass, ItemDefinition, ItemOracle, Rarity, Requirements, StatGrants,
};
pub use store::StoreOracle;

use crate::state::ItemHandle;

/// Aggregates read-only oracles required by the resolver and executor.
pub struct Env<'a, I, S>
where
    I: ItemOracle + ?Sized,
    S: StoreOracle + ?Sized,
{
    items: Option<&'a I>,
    store: Option<&'a S>,
}

// Manual impls: derives would require the oracle trait objects themselves to be Clone.
impl<I, S> Clone for Env<'_, I, S>
where
    I: ItemOracle + ?Sized,
    S: StoreOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, S> Copy for Env<'_, I, S>
where
    I: ItemOracle + ?Sized,
    S: StoreOracle + ?Sized,
{
}

impl<I, S> core::fmt::Debug for Env<'_, I, S>
where
    I: ItemOracle + ?Sized,
    S: StoreOracle + ?Sized,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Env")
            .field("items", &self.items.is_some())
            .field("store", &self.store.is_some())
            .finish()
    }
}

pub type TransferEnv<'a> = Env<'a, dyn ItemOracle + 'a, dyn StoreOracle + 'a>;

impl<'a, I, S> Env<'a, I, S>
where
    I: ItemOracle + ?Sized,
    S: StoreOracle + ?Sized,
{
    pub fn new(items: Option<&'a I>, store: Option<&'a S>) -> Self {
        Self { items, store }
    }

    pub fn with_all(items: &'a I, store: &'a S) -> Self {
        Self::new(Some(items), Some(store))
    }

    pub fn empty() -> Self {
        Self {
            items: None,
            store: None,
        }
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no item oracle was provided.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the StoreOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::StoreNotAvailable` if no store oracle was provided.
    pub fn store(&self) -> Result<&'a S, OracleError> {
        self.store.ok_or(OracleError::StoreNotAvailable)
    }

    /// Looks up a definition, failing if the catalog does not know the handle.
    pub fn definition(&self, handle: ItemHandle) -> Result<&'a ItemDefinition, OracleError> {
        self.items()?
            .definition(handle)
            .ok_or(OracleError::ItemNotFound(handle))
    }
}

impl<'a, I, S> Env<'a, I, S>
where
    I: ItemOracle + 'a,
    S: StoreOracle + 'a,
{
    /// Converts this environment into a trait-object based `TransferEnv` (borrows self).
    pub fn as_transfer_env(&self) -> TransferEnv<'a> {
        let items: Option<&'a dyn ItemOracle> = self.items.map(|items| items as _);
        let store: Option<&'a dyn StoreOracle> = self.store.map(|store| store as _);
        Env::new(items, store)
    }
}
