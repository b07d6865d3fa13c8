//! Transfer actions: requests, resolution and mutation.
//!
//! A drag from one slot to another arrives as a [`TransferRequest`]. The
//! resolver classifies it into exactly one [`Resolution`] following a fixed
//! priority order; only [`Resolution::Apply`] carries an [`Action`] that the
//! executor turns into a state change.
//!
//! # Module Structure
//!
//! - `request`: Input types (TransferRequest, Command)
//! - `outcome`: Resolution and reported outcome types plus reason codes
//! - `resolve`: Priority-ordered rule table
//! - `apply`: Mutation executor for resolved actions

pub mod apply;
pub mod outcome;
pub mod request;
pub mod resolve;

pub use apply::{ApplyError, apply};
pub use outcome::{
    FeedbackCue, NoOpReason, RejectReason, Resolution, TransferOutcome, UnresolvedReason,
};
pub use request::{Command, TransferRequest};
pub use resolve::{ResolveInput, resolve};

use crate::slot::{EquipSlot, SlotId, WeaponSlot};
use crate::state::ItemHandle;

/// A concrete, atomic state mutation selected by the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Draw a new instance from the store into an empty inventory slot.
    Purchase {
        offer: u16,
        item: ItemHandle,
        to: u8,
        price: u64,
    },
    /// Destroy an inventory item for gold.
    Sell { from: u8, price: u64 },
    /// Move an inventory item into the stash.
    /// `to` is the end of the stash at resolution time.
    Deposit { from: u8, to: u16 },
    /// Move a stash entry into an empty inventory slot.
    Withdraw { from: u16, to: u8 },
    /// Move an inventory item into an empty equipment slot.
    EquipFromInventory { from: u8, slot: EquipSlot },
    /// Exchange an inventory item with the occupant of an equipment slot.
    EquipSwap { from: u8, slot: EquipSlot },
    /// Exchange the contents of two weapon slots.
    WeaponSwap { from: WeaponSlot, to: WeaponSlot },
    /// Destroy an equipped item.
    DiscardEquipped { slot: EquipSlot },
    /// Destroy an inventory item.
    DiscardInventory { from: u8 },
    /// Move an equipped item into an empty inventory slot.
    Unequip { slot: EquipSlot, to: u8 },
    /// Exchange an equipped item with the occupant of an inventory slot.
    UnequipSwap { slot: EquipSlot, with: u8 },
    /// Move or exchange within the inventory.
    Sort { from: u8, to: u8 },
    /// Put the weapon in `slot` in hand.
    SelectWeapon { slot: WeaponSlot },
}

impl Action {
    /// Returns a static label for logging and presentation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Purchase { .. } => "purchase",
            Action::Sell { .. } => "sell",
            Action::Deposit { .. } => "deposit",
            Action::Withdraw { .. } => "withdraw",
            Action::EquipFromInventory { .. } => "equip",
            Action::EquipSwap { .. } => "equip_swap",
            Action::WeaponSwap { .. } => "weapon_swap",
            Action::DiscardEquipped { .. } => "discard_equipped",
            Action::DiscardInventory { .. } => "discard_inventory",
            Action::Unequip { .. } => "unequip",
            Action::UnequipSwap { .. } => "unequip_swap",
            Action::Sort { .. } => "sort",
            Action::SelectWeapon { .. } => "select_weapon",
        }
    }

    /// True for the only two actions allowed to change gold.
    pub fn moves_gold(&self) -> bool {
        matches!(self, Action::Purchase { .. } | Action::Sell { .. })
    }

    /// Slots whose contents this action changes, source first.
    pub fn slots(&self) -> [Option<SlotId>; 2] {
        use SlotId::{Equipment, Inventory, Stash, Store};
        match *self {
            Action::Purchase { offer, to, .. } => [Some(Store(offer)), Some(Inventory(to))],
            Action::Sell { from, .. } => [Some(Inventory(from)), Some(SlotId::Sell)],
            Action::Deposit { from, to } => [Some(Inventory(from)), Some(Stash(to))],
            Action::Withdraw { from, to } => [Some(Stash(from)), Some(Inventory(to))],
            Action::EquipFromInventory { from, slot } | Action::EquipSwap { from, slot } => {
                [Some(Inventory(from)), Some(Equipment(slot))]
            }
            Action::WeaponSwap { from, to } => {
                [Some(Equipment(from.into())), Some(Equipment(to.into()))]
            }
            Action::DiscardEquipped { slot } => [Some(Equipment(slot)), Some(SlotId::Trash)],
            Action::DiscardInventory { from } => [Some(Inventory(from)), Some(SlotId::Trash)],
            Action::Unequip { slot, to } => [Some(Equipment(slot)), Some(Inventory(to))],
            Action::UnequipSwap { slot, with } => [Some(Equipment(slot)), Some(Inventory(with))],
            Action::Sort { from, to } => [Some(Inventory(from)), Some(Inventory(to))],
            Action::SelectWeapon { slot } => [Some(Equipment(slot.into())), None],
        }
    }
}
