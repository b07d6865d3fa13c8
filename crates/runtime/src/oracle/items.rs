//! Minimal [`stash_core::ItemOracle`] backed by an in-memory map.
use std::collections::HashMap;

use stash_core::{ItemDefinition, ItemHandle, ItemOracle};

/// ItemOracle implementation with static item definitions
pub struct ItemOracleImpl {
    definitions: HashMap<ItemHandle, ItemDefinition>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Add an item definition, replacing any previous one with the same handle.
    pub fn add_definition(&mut self, def: ItemDefinition) {
        self.definitions.insert(def.handle, def);
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for ItemOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<ItemDefinition> for ItemOracleImpl {
    fn from_iter<T: IntoIterator<Item = ItemDefinition>>(iter: T) -> Self {
        let mut oracle = Self::new();
        for def in iter {
            oracle.add_definition(def);
        }
        oracle
    }
}

impl ItemOracle for ItemOracleImpl {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.definitions.get(&handle)
    }

    fn all_definitions(&self) -> Vec<&ItemDefinition> {
        let mut all: Vec<_> = self.definitions.values().collect();
        all.sort_by_key(|def| def.handle);
        all
    }
}
