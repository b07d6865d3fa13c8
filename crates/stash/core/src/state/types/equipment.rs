//! Equipment slots for the player.
//!
//! Three interchangeable weapon slots, five type-locked armor slots, and the
//! reference to the weapon currently in hand.

use strum::IntoEnumIterator;

use crate::config::EngineConfig;
use crate::slot::{EquipSlot, SlotFamily, WeaponSlot};
use crate::state::types::ItemInstance;

/// Equipment state for the player.
///
/// # Invariants
///
/// - `equipped_weapon`, when set, names an occupied weapon slot
/// - armor slots only hold armor of the matching type (checked against the
///   catalog by [`crate::PlayerState::validate`])
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub weapons: [Option<ItemInstance>; EngineConfig::WEAPON_SLOTS],
    pub armor: [Option<ItemInstance>; EngineConfig::ARMOR_SLOTS],
    /// Weapon slot currently in hand.
    pub equipped_weapon: Option<WeaponSlot>,
}

impl Equipment {
    /// Creates empty equipment (no weapons or armor).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipSlot) -> Option<ItemInstance> {
        *self.slot_ref(slot)
    }

    pub fn weapon(&self, slot: WeaponSlot) -> Option<ItemInstance> {
        self.weapons[slot.index()]
    }

    /// Places `item` in `slot`, returning the previous occupant.
    pub fn replace(&mut self, slot: EquipSlot, item: ItemInstance) -> Option<ItemInstance> {
        self.slot_mut(slot).replace(item)
    }

    /// Empties `slot`, returning its occupant.
    ///
    /// Emptying the equipped weapon's slot clears the equipped reference.
    pub fn take(&mut self, slot: EquipSlot) -> Option<ItemInstance> {
        if slot.weapon().is_some() && slot.weapon() == self.equipped_weapon {
            self.equipped_weapon = None;
        }
        self.slot_mut(slot).take()
    }

    /// Exchanges two weapon slots. The equipped reference follows its item.
    pub fn swap_weapons(&mut self, a: WeaponSlot, b: WeaponSlot) {
        self.weapons.swap(a.index(), b.index());
        self.equipped_weapon = match self.equipped_weapon {
            Some(slot) if slot == a => Some(b),
            Some(slot) if slot == b => Some(a),
            other => other,
        };
    }

    /// Weapon slot and instance currently in hand.
    pub fn equipped(&self) -> Option<(WeaponSlot, ItemInstance)> {
        let slot = self.equipped_weapon?;
        self.weapon(slot).map(|item| (slot, item))
    }

    /// Every occupied slot, weapons first.
    pub fn iter(&self) -> impl Iterator<Item = (EquipSlot, ItemInstance)> + '_ {
        EquipSlot::iter().filter_map(|slot| self.get(slot).map(|item| (slot, item)))
    }

    /// Items that contribute stat grants: all armor plus the weapon in hand.
    pub fn active_items(&self) -> impl Iterator<Item = ItemInstance> + '_ {
        self.armor
            .iter()
            .flatten()
            .copied()
            .chain(self.equipped().map(|(_, item)| item))
    }

    fn slot_ref(&self, slot: EquipSlot) -> &Option<ItemInstance> {
        match slot.family() {
            SlotFamily::Weapon(weapon) => &self.weapons[weapon.index()],
            SlotFamily::Armor(armor) => &self.armor[armor.index()],
        }
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<ItemInstance> {
        match slot.family() {
            SlotFamily::Weapon(weapon) => &mut self.weapons[weapon.index()],
            SlotFamily::Armor(armor) => &mut self.armor[armor.index()],
        }
    }
}
