//! Mutation executor for resolved actions.
//!
//! Each action is applied as a unit against the given state. The engine runs
//! this on a staged copy, so a failure part-way through never reaches the
//! committed player. Failures here mean the resolver and the state disagree,
//! which is an internal fault rather than a player-facing rejection.

use tracing::debug;

use super::Action;
use crate::error::{ErrorSeverity, GameError};
use crate::slot::{EquipSlot, SlotId, WeaponSlot};
use crate::state::{ItemInstance, PlayerState};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ApplyError {
    #[error("slot {0} is empty")]
    EmptySlot(SlotId),

    #[error("slot {0} is already occupied")]
    SlotOccupied(SlotId),

    #[error("gold would underflow: need {required}, have {available}")]
    GoldUnderflow { required: u64, available: u64 },

    #[error("gold would overflow")]
    GoldOverflow,

    #[error("stash entry {0} is not the end of the stash")]
    StashPosition(u16),
}

impl GameError for ApplyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            ApplyError::EmptySlot(_) => "APPLY_EMPTY_SLOT",
            ApplyError::SlotOccupied(_) => "APPLY_SLOT_OCCUPIED",
            ApplyError::GoldUnderflow { .. } => "APPLY_GOLD_UNDERFLOW",
            ApplyError::GoldOverflow => "APPLY_GOLD_OVERFLOW",
            ApplyError::StashPosition(_) => "APPLY_STASH_POSITION",
        }
    }
}

/// Applies `action` to `state`.
///
/// Stats are not recomputed here; the engine does that once per command.
pub fn apply(state: &mut PlayerState, action: &Action) -> Result<(), ApplyError> {
    debug!(action = action.as_str(), "applying action");

    match *action {
        Action::Purchase { item, to, price, .. } => {
            ensure_free(state, to)?;
            state.gold = state
                .gold
                .checked_sub(price)
                .ok_or(ApplyError::GoldUnderflow {
                    required: price,
                    available: state.gold,
                })?;
            let instance = state.allocate_instance(item);
            place(state, to, instance)
        }
        Action::Sell { from, price } => {
            take_inventory(state, from)?;
            state.gold = state.gold.checked_add(price).ok_or(ApplyError::GoldOverflow)?;
            Ok(())
        }
        Action::Deposit { from, to } => {
            if to as usize != state.stash.len() {
                return Err(ApplyError::StashPosition(to));
            }
            let item = take_inventory(state, from)?;
            state.stash.push(item);
            Ok(())
        }
        Action::Withdraw { from, to } => {
            ensure_free(state, to)?;
            let item = state
                .stash
                .remove(from as usize)
                .ok_or(ApplyError::EmptySlot(SlotId::Stash(from)))?;
            place(state, to, item)
        }
        Action::EquipFromInventory { from, slot } => {
            if state.equipment.get(slot).is_some() {
                return Err(ApplyError::SlotOccupied(SlotId::Equipment(slot)));
            }
            let item = take_inventory(state, from)?;
            state.equipment.replace(slot, item);
            auto_select(state, slot);
            Ok(())
        }
        Action::EquipSwap { from, slot } => {
            let item = take_inventory(state, from)?;
            let displaced = state
                .equipment
                .replace(slot, item)
                .ok_or(ApplyError::EmptySlot(SlotId::Equipment(slot)))?;
            place(state, from, displaced)
        }
        Action::WeaponSwap { from, to } => {
            occupied_weapon(state, from)?;
            state.equipment.swap_weapons(from, to);
            Ok(())
        }
        Action::DiscardEquipped { slot } => {
            take_equipped(state, slot)?;
            Ok(())
        }
        Action::DiscardInventory { from } => {
            take_inventory(state, from)?;
            Ok(())
        }
        Action::Unequip { slot, to } => {
            ensure_free(state, to)?;
            let item = take_equipped(state, slot)?;
            place(state, to, item)
        }
        Action::UnequipSwap { slot, with } => {
            let incoming = take_inventory(state, with)?;
            let outgoing = state
                .equipment
                .replace(slot, incoming)
                .ok_or(ApplyError::EmptySlot(SlotId::Equipment(slot)))?;
            place(state, with, outgoing)
        }
        Action::Sort { from, to } => {
            if state.inventory.get(from as usize).is_none() {
                return Err(ApplyError::EmptySlot(SlotId::Inventory(from)));
            }
            state.inventory.swap(from as usize, to as usize);
            Ok(())
        }
        Action::SelectWeapon { slot } => {
            occupied_weapon(state, slot)?;
            state.equipment.equipped_weapon = Some(slot);
            Ok(())
        }
    }
}

/// Puts a freshly equipped weapon in hand if nothing else is.
fn auto_select(state: &mut PlayerState, slot: EquipSlot) {
    if let Some(weapon) = slot.weapon()
        && state.equipment.equipped_weapon.is_none()
    {
        state.equipment.equipped_weapon = Some(weapon);
    }
}

fn occupied_weapon(state: &PlayerState, slot: WeaponSlot) -> Result<ItemInstance, ApplyError> {
    state
        .equipment
        .weapon(slot)
        .ok_or(ApplyError::EmptySlot(SlotId::Equipment(slot.into())))
}

fn ensure_free(state: &PlayerState, index: u8) -> Result<(), ApplyError> {
    match state.inventory.get(index as usize) {
        Some(_) => Err(ApplyError::SlotOccupied(SlotId::Inventory(index))),
        None => Ok(()),
    }
}

fn take_inventory(state: &mut PlayerState, index: u8) -> Result<ItemInstance, ApplyError> {
    state
        .inventory
        .take(index as usize)
        .ok_or(ApplyError::EmptySlot(SlotId::Inventory(index)))
}

fn take_equipped(state: &mut PlayerState, slot: EquipSlot) -> Result<ItemInstance, ApplyError> {
    state
        .equipment
        .take(slot)
        .ok_or(ApplyError::EmptySlot(SlotId::Equipment(slot)))
}

fn place(state: &mut PlayerState, index: u8, item: ItemInstance) -> Result<(), ApplyError> {
    match state.inventory.put(index as usize, item) {
        Ok(None) => Ok(()),
        Ok(Some(_)) | Err(_) => Err(ApplyError::SlotOccupied(SlotId::Inventory(index))),
    }
}
