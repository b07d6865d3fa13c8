//! Item-related state types.
//!
//! - ItemHandle: Reference to an item definition in the catalog
//! - InstanceId: Identity of one runtime item
//! - ItemInstance: A runtime item held by exactly one container

/// Reference to an item definition stored outside the core (lookup via Env).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u32);

/// Identity of a single item instance.
///
/// Allocated by [`crate::PlayerState::allocate_instance`]; never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceId(pub u32);

/// A runtime item. Instances of the same definition are otherwise identical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemInstance {
    pub id: InstanceId,
    pub handle: ItemHandle,
}

impl ItemInstance {
    pub fn new(id: InstanceId, handle: ItemHandle) -> Self {
        Self { id, handle }
    }
}
