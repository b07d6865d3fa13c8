use crate::state::ItemHandle;

/// Read-only list of items the store sells.
///
/// The store never runs out: purchasing an offer draws a fresh instance of
/// its definition and leaves the offer in place.
pub trait StoreOracle: Send + Sync {
    /// Returns the item offered at `index`, if any.
    fn offer(&self, index: u16) -> Option<ItemHandle>;

    /// Number of offers on display.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
