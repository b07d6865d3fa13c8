mod bitmask;

use arrayvec::ArrayVec;

use crate::slot::SlotId;
use crate::state::PlayerState;

pub use bitmask::PlayerFields;

/// Minimal description of an applied command's impact on player state.
///
/// Stores only which fields changed and which slots were addressed; the new
/// values are read from the authoritative [`PlayerState`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateDelta {
    pub fields: PlayerFields,
    /// Slots whose contents the applied action changed (source first).
    pub touched: ArrayVec<SlotId, 2>,
}

impl StateDelta {
    /// Delta for a command that changed nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a delta by comparing two player states field by field.
    pub fn from_states(
        before: &PlayerState,
        after: &PlayerState,
        touched: impl IntoIterator<Item = SlotId>,
    ) -> Self {
        let mut fields = PlayerFields::empty();

        if before.gold != after.gold {
            fields |= PlayerFields::GOLD;
        }
        if before.inventory != after.inventory {
            fields |= PlayerFields::INVENTORY;
        }
        if before.stash != after.stash {
            fields |= PlayerFields::STASH;
        }
        if before.equipment.weapons != after.equipment.weapons
            || before.equipment.armor != after.equipment.armor
        {
            fields |= PlayerFields::EQUIPMENT;
        }
        if before.equipment.equipped_weapon != after.equipment.equipped_weapon {
            fields |= PlayerFields::EQUIPPED_WEAPON;
        }
        if before.modified != after.modified || before.totals != after.totals {
            fields |= PlayerFields::STATS;
        }

        let mut slots = ArrayVec::new();
        for slot in touched.into_iter().take(2) {
            slots.push(slot);
        }

        Self {
            fields,
            touched: slots,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
