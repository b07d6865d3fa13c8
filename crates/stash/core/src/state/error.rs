//! Player state invariant violations.
//!
//! These are raised by [`crate::PlayerState::validate`] after a staged
//! mutation. Each one means the resolver or executor produced an impossible
//! state; none is reachable from user input on a correct build.

use crate::error::{ErrorSeverity, GameError};
use crate::slot::{ArmorSlot, EquipSlot, WeaponSlot};
use crate::state::{InstanceId, ItemHandle};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvariantViolation {
    /// An instance is held by more than one container.
    #[error("item instance {0:?} is held by more than one container")]
    DuplicateInstance(InstanceId),

    /// An instance id was never handed out by the allocator.
    #[error("item instance {0:?} was never allocated")]
    UnallocatedInstance(InstanceId),

    /// A held item has no catalog definition.
    #[error("held item {0:?} has no catalog definition")]
    UnknownDefinition(ItemHandle),

    /// An armor slot holds something other than its armor type.
    #[error("armor slot {slot} holds incompatible item {handle:?}")]
    ArmorSlotMismatch { slot: ArmorSlot, handle: ItemHandle },

    /// A weapon slot holds a non-weapon.
    #[error("weapon slot {slot} holds non-weapon {handle:?}")]
    NonWeaponInWeaponSlot { slot: WeaponSlot, handle: ItemHandle },

    /// The equipped weapon reference names an empty slot.
    #[error("equipped weapon reference points at empty slot {0}")]
    EquippedWeaponMissing(WeaponSlot),

    /// Gold moved during an action other than a purchase or sale.
    #[error("gold changed from {before} to {after} outside a purchase or sale")]
    GoldChanged { before: u64, after: u64 },
}

impl InvariantViolation {
    /// The equipment slot involved, if any.
    pub fn slot(&self) -> Option<EquipSlot> {
        match self {
            InvariantViolation::ArmorSlotMismatch { slot, .. } => Some((*slot).into()),
            InvariantViolation::NonWeaponInWeaponSlot { slot, .. }
            | InvariantViolation::EquippedWeaponMissing(slot) => Some((*slot).into()),
            _ => None,
        }
    }
}

impl GameError for InvariantViolation {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        use InvariantViolation::*;
        match self {
            DuplicateInstance(_) => "INVARIANT_DUPLICATE_INSTANCE",
            UnallocatedInstance(_) => "INVARIANT_UNALLOCATED_INSTANCE",
            UnknownDefinition(_) => "INVARIANT_UNKNOWN_DEFINITION",
            ArmorSlotMismatch { .. } => "INVARIANT_ARMOR_SLOT_MISMATCH",
            NonWeaponInWeaponSlot { .. } => "INVARIANT_NON_WEAPON_IN_WEAPON_SLOT",
            EquippedWeaponMissing(_) => "INVARIANT_EQUIPPED_WEAPON_MISSING",
            GoldChanged { .. } => "INVARIANT_GOLD_CHANGED",
        }
    }
}
