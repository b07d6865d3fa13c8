//! Positional player inventory.

use crate::config::EngineConfig;
use crate::state::types::ItemInstance;

/// Fixed-capacity inventory addressed by slot index.
///
/// Slot positions matter for display and for sort drags; an empty slot is a
/// valid drop target. Capacity is structural: there are never more than
/// [`EngineConfig::INVENTORY_CAPACITY`] slots.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    pub slots: [Option<ItemInstance>; EngineConfig::INVENTORY_CAPACITY],
}

impl InventoryState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<ItemInstance> {
        self.slots.get(index).copied().flatten()
    }

    /// Removes and returns the item at `index`.
    pub fn take(&mut self, index: usize) -> Option<ItemInstance> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Places `item` at `index`, returning whatever was there.
    ///
    /// Out-of-range indices hand the item back unchanged.
    pub fn put(
        &mut self,
        index: usize,
        item: ItemInstance,
    ) -> Result<Option<ItemInstance>, ItemInstance> {
        match self.slots.get_mut(index) {
            Some(slot) => Ok(slot.replace(item)),
            None => Err(item),
        }
    }

    /// Exchanges two slots. Either or both may be empty.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }

    pub fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Returns `preferred` if it is empty, otherwise the first empty slot.
    pub fn free_slot_preferring(&self, preferred: usize) -> Option<usize> {
        match self.slots.get(preferred) {
            Some(None) => Some(preferred),
            _ => self.first_free(),
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.first_free().is_none()
    }

    /// Occupied slots with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, ItemInstance)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|item| (index, item)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{InstanceId, ItemHandle};

    fn item(id: u32) -> ItemInstance {
        ItemInstance::new(InstanceId(id), ItemHandle(100 + id))
    }

    #[test]
    fn free_slot_prefers_requested_index() {
        let mut inventory = InventoryState::empty();
        assert_eq!(inventory.free_slot_preferring(4), Some(4));

        inventory.put(4, item(1)).unwrap();
        inventory.put(0, item(2)).unwrap();
        assert_eq!(inventory.free_slot_preferring(4), Some(1));
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn full_inventory_has_no_free_slot() {
        let mut inventory = InventoryState::empty();
        for index in 0..EngineConfig::INVENTORY_CAPACITY {
            inventory.put(index, item(index as u32)).unwrap();
        }
        assert!(inventory.is_full());
        assert_eq!(inventory.free_slot_preferring(3), None);
        assert_eq!(
            inventory.put(EngineConfig::INVENTORY_CAPACITY, item(99)),
            Err(item(99))
        );
    }

    #[test]
    fn swap_moves_into_empty_slot() {
        let mut inventory = InventoryState::empty();
        inventory.put(2, item(7)).unwrap();
        inventory.swap(2, 9);
        assert_eq!(inventory.get(2), None);
        assert_eq!(inventory.get(9), Some(item(7)));
    }
}
