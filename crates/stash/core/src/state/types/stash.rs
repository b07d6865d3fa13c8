use crate::state::types::ItemInstance;

/// Persistent storage with no capacity limit.
///
/// Order carries no meaning beyond addressing entries for withdrawal.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StashState {
    pub items: Vec<ItemInstance>,
}

impl StashState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<ItemInstance> {
        self.items.get(index).copied()
    }

    pub fn push(&mut self, item: ItemInstance) {
        self.items.push(item);
    }

    /// Removes the entry at `index`, preserving the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<ItemInstance> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemInstance> {
        self.items.iter()
    }
}
