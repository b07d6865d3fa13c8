//! Store offers as an ordered list of item handles.
use stash_core::{ItemHandle, StoreOracle};

#[derive(Debug, Clone, Default)]
pub struct StoreOracleImpl {
    offers: Vec<ItemHandle>,
}

impl StoreOracleImpl {
    pub fn new(offers: Vec<ItemHandle>) -> Self {
        Self { offers }
    }

    pub fn offers(&self) -> &[ItemHandle] {
        &self.offers
    }
}

impl StoreOracle for StoreOracleImpl {
    fn offer(&self, index: u16) -> Option<ItemHandle> {
        self.offers.get(index as usize).copied()
    }

    fn len(&self) -> usize {
        self.offers.len()
    }
}
