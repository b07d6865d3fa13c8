//! Authoritative player state representation.
//!
//! This module owns the data structures that describe the player's gold,
//! attributes, inventory, stash and equipment. Presentation and persistence
//! layers clone or query this state but mutate it exclusively through the
//! engine.
pub mod delta;
pub mod error;
pub mod types;

use std::collections::BTreeSet;

pub use delta::{PlayerFields, StateDelta};
pub use error::InvariantViolation;
pub use types::{
    Attributes, CombatTotals, Equipment, InstanceId, InventoryState, ItemHandle, ItemInstance,
    StashState,
};

use crate::env::{ItemClass, ItemOracle, OracleError};
use crate::slot::{SlotFamily, SlotId};

/// Canonical snapshot of one player's items and stats.
///
/// # Invariants
///
/// Checked by [`PlayerState::validate`] after every applied command:
///
/// 1. Every instance is held by exactly one of inventory, stash or one equipment slot
/// 2. Inventory holds at most `INVENTORY_CAPACITY` items (structural)
/// 3. Armor slots hold only armor of their own type
/// 4. Weapon slots hold only weapons
/// 5. Gold is never negative (structural, `u64`)
/// 6. The equipped weapon reference names an occupied weapon slot
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub gold: u64,
    pub level: u32,
    /// Stored attributes.
    pub base: Attributes,
    /// Base attributes adjusted by active equipment.
    pub modified: Attributes,
    /// Equipment-derived totals.
    pub totals: CombatTotals,
    pub inventory: InventoryState,
    pub stash: StashState,
    pub equipment: Equipment,

    /// Sequential instance id allocator (monotonically increasing, never reused).
    next_instance_id: u32,
}

impl PlayerState {
    /// Creates a player with empty containers.
    pub fn new(gold: u64, level: u32, base: Attributes) -> Self {
        Self {
            gold,
            level,
            base,
            modified: base,
            totals: CombatTotals::default(),
            inventory: InventoryState::empty(),
            stash: StashState::empty(),
            equipment: Equipment::empty(),
            next_instance_id: 0,
        }
    }

    /// Draws a new instance of `handle`. The instance is not placed anywhere.
    ///
    /// # Panics
    ///
    /// Panics if all instance ids are exhausted.
    pub fn allocate_instance(&mut self, handle: ItemHandle) -> ItemInstance {
        let id = InstanceId(self.next_instance_id);
        self.next_instance_id = self
            .next_instance_id
            .checked_add(1)
            .expect("item instance id overflow");
        ItemInstance::new(id, handle)
    }

    /// Next id the allocator will hand out.
    pub fn next_instance_id(&self) -> u32 {
        self.next_instance_id
    }

    /// Item currently held at `slot`.
    ///
    /// Store, sell and trash slots never hold player items.
    pub fn item_at(&self, slot: SlotId) -> Option<ItemInstance> {
        match slot {
            SlotId::Inventory(index) => self.inventory.get(index as usize),
            SlotId::Stash(index) => self.stash.get(index as usize),
            SlotId::Equipment(slot) => self.equipment.get(slot),
            SlotId::Store(_) | SlotId::Sell | SlotId::Trash => None,
        }
    }

    /// Every held instance: inventory, then stash, then equipment.
    pub fn items(&self) -> impl Iterator<Item = ItemInstance> + '_ {
        self.inventory
            .iter()
            .map(|(_, item)| item)
            .chain(self.stash.iter().copied())
            .chain(self.equipment.iter().map(|(_, item)| item))
    }

    /// Rebuilds modified attributes and combat totals from active equipment.
    pub fn recompute_stats<I>(&mut self, items: &I) -> Result<(), OracleError>
    where
        I: ItemOracle + ?Sized,
    {
        let mut modified = self.base;
        let mut totals = CombatTotals::default();

        for item in self.equipment.active_items() {
            let definition = items
                .definition(item.handle)
                .ok_or(OracleError::ItemNotFound(item.handle))?;
            modified += &definition.grants;
            totals += &definition.grants;
        }

        self.modified = modified;
        self.totals = totals;
        Ok(())
    }

    /// Checks every state invariant against the catalog.
    pub fn validate<I>(&self, items: &I) -> Result<(), InvariantViolation>
    where
        I: ItemOracle + ?Sized,
    {
        let mut seen = BTreeSet::new();
        for item in self.items() {
            if item.id.0 >= self.next_instance_id {
                return Err(InvariantViolation::UnallocatedInstance(item.id));
            }
            if !seen.insert(item.id) {
                return Err(InvariantViolation::DuplicateInstance(item.id));
            }
        }

        for (slot, item) in self.equipment.iter() {
            let definition = items
                .definition(item.handle)
                .ok_or(InvariantViolation::UnknownDefinition(item.handle))?;

            match (slot.family(), definition.class) {
                (SlotFamily::Weapon(_), ItemClass::Weapon) => {}
                (SlotFamily::Weapon(slot), ItemClass::Armor(_)) => {
                    return Err(InvariantViolation::NonWeaponInWeaponSlot {
                        slot,
                        handle: item.handle,
                    });
                }
                (SlotFamily::Armor(slot), ItemClass::Armor(kind)) if slot.accepts(kind) => {}
                (SlotFamily::Armor(slot), _) => {
                    return Err(InvariantViolation::ArmorSlotMismatch {
                        slot,
                        handle: item.handle,
                    });
                }
            }
        }

        if let Some(slot) = self.equipment.equipped_weapon
            && self.equipment.weapon(slot).is_none()
        {
            return Err(InvariantViolation::EquippedWeaponMissing(slot));
        }

        Ok(())
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(0, 1, Attributes::default())
    }
}
