//! Slot identities and their classification into container kinds.
//!
//! Presentation layers name slots with short text identifiers
//! (`inventory:3`, `weapon1`, `trash`, ...). [`SlotId`] is the typed form and
//! [`classify`] maps it to a [`ContainerKind`] plus, for equipment, the
//! concrete [`EquipSlot`]. Classification is a static lookup with no side
//! effects.

use core::fmt;
use core::str::FromStr;

use crate::config::EngineConfig;
use crate::env::ArmorType;
use crate::error::{ErrorSeverity, GameError};

/// Semantic category of a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ContainerKind {
    Inventory,
    Store,
    Sell,
    Stash,
    Trash,
    Equipment,
}

/// One of the eight equipment slots.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipSlot {
    Weapon1,
    Weapon2,
    Weapon3,
    Head,
    Chest,
    Legs,
    Gloves,
    Boots,
}

impl EquipSlot {
    /// Splits the slot into its weapon or armor family.
    pub fn family(self) -> SlotFamily {
        match self {
            EquipSlot::Weapon1 => SlotFamily::Weapon(WeaponSlot::Weapon1),
            EquipSlot::Weapon2 => SlotFamily::Weapon(WeaponSlot::Weapon2),
            EquipSlot::Weapon3 => SlotFamily::Weapon(WeaponSlot::Weapon3),
            EquipSlot::Head => SlotFamily::Armor(ArmorSlot::Head),
            EquipSlot::Chest => SlotFamily::Armor(ArmorSlot::Chest),
            EquipSlot::Legs => SlotFamily::Armor(ArmorSlot::Legs),
            EquipSlot::Gloves => SlotFamily::Armor(ArmorSlot::Gloves),
            EquipSlot::Boots => SlotFamily::Armor(ArmorSlot::Boots),
        }
    }

    pub fn weapon(self) -> Option<WeaponSlot> {
        match self.family() {
            SlotFamily::Weapon(slot) => Some(slot),
            SlotFamily::Armor(_) => None,
        }
    }

    pub fn armor(self) -> Option<ArmorSlot> {
        match self.family() {
            SlotFamily::Armor(slot) => Some(slot),
            SlotFamily::Weapon(_) => None,
        }
    }

    pub fn is_weapon(self) -> bool {
        self.weapon().is_some()
    }

    pub fn is_armor(self) -> bool {
        self.armor().is_some()
    }
}

/// An equip slot split by multiplicity rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotFamily {
    Weapon(WeaponSlot),
    Armor(ArmorSlot),
}

/// Weapon slots are interchangeable: any weapon fits any of them.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponSlot {
    Weapon1,
    Weapon2,
    Weapon3,
}

impl WeaponSlot {
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl From<WeaponSlot> for EquipSlot {
    fn from(slot: WeaponSlot) -> Self {
        match slot {
            WeaponSlot::Weapon1 => EquipSlot::Weapon1,
            WeaponSlot::Weapon2 => EquipSlot::Weapon2,
            WeaponSlot::Weapon3 => EquipSlot::Weapon3,
        }
    }
}

/// Armor slots are type-locked: each accepts exactly one [`ArmorType`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArmorSlot {
    Head,
    Chest,
    Legs,
    Gloves,
    Boots,
}

impl ArmorSlot {
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The only armor type this slot holds.
    pub const fn armor_type(self) -> ArmorType {
        match self {
            ArmorSlot::Head => ArmorType::Head,
            ArmorSlot::Chest => ArmorType::Chest,
            ArmorSlot::Legs => ArmorType::Legs,
            ArmorSlot::Gloves => ArmorType::Gloves,
            ArmorSlot::Boots => ArmorType::Boots,
        }
    }

    pub fn accepts(self, kind: ArmorType) -> bool {
        self.armor_type() == kind
    }
}

impl From<ArmorSlot> for EquipSlot {
    fn from(slot: ArmorSlot) -> Self {
        match slot {
            ArmorSlot::Head => EquipSlot::Head,
            ArmorSlot::Chest => EquipSlot::Chest,
            ArmorSlot::Legs => EquipSlot::Legs,
            ArmorSlot::Gloves => EquipSlot::Gloves,
            ArmorSlot::Boots => EquipSlot::Boots,
        }
    }
}

/// Typed slot identity supplied by the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotId {
    /// Positional inventory slot, `0..INVENTORY_CAPACITY`.
    Inventory(u8),
    /// Store offer by index.
    Store(u16),
    Sell,
    /// Stash entry by index. As a drop target the index is ignored.
    Stash(u16),
    Trash,
    Equipment(EquipSlot),
}

impl SlotId {
    pub fn kind(&self) -> ContainerKind {
        match self {
            SlotId::Inventory(_) => ContainerKind::Inventory,
            SlotId::Store(_) => ContainerKind::Store,
            SlotId::Sell => ContainerKind::Sell,
            SlotId::Stash(_) => ContainerKind::Stash,
            SlotId::Trash => ContainerKind::Trash,
            SlotId::Equipment(_) => ContainerKind::Equipment,
        }
    }

    pub fn equip_slot(&self) -> Option<EquipSlot> {
        match self {
            SlotId::Equipment(slot) => Some(*slot),
            _ => None,
        }
    }

    pub fn is_weapon_slot(&self) -> bool {
        self.equip_slot().is_some_and(EquipSlot::is_weapon)
    }

    pub fn is_armor_slot(&self) -> bool {
        self.equip_slot().is_some_and(EquipSlot::is_armor)
    }

    pub fn is_any_equipment_slot(&self) -> bool {
        self.equip_slot().is_some()
    }

    pub fn inventory_index(&self) -> Option<usize> {
        match self {
            SlotId::Inventory(index) => Some(*index as usize),
            _ => None,
        }
    }
}

/// Maps a slot identity to its container kind and, for equipment, its equip slot.
pub fn classify(slot: SlotId) -> (ContainerKind, Option<EquipSlot>) {
    (slot.kind(), slot.equip_slot())
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotId::Inventory(index) => write!(f, "inventory:{index}"),
            SlotId::Store(index) => write!(f, "store:{index}"),
            SlotId::Sell => f.write_str("sell"),
            SlotId::Stash(index) => write!(f, "stash:{index}"),
            SlotId::Trash => f.write_str("trash"),
            SlotId::Equipment(slot) => write!(f, "{slot}"),
        }
    }
}

impl FromStr for SlotId {
    type Err = SlotError;

    /// Parses `inventory:N`, `store:N`, `stash:N` (bare `stash` is `stash:0`),
    /// `sell`, `trash` and the eight equipment slot names.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let unknown = || SlotError::UnknownSlot(raw.to_owned());
        let text = raw.trim();

        let (name, index) = match text.split_once(':') {
            Some((name, index)) => (name, Some(index.parse::<u16>().map_err(|_| unknown())?)),
            None => (text, None),
        };

        match (name.to_ascii_lowercase().as_str(), index) {
            ("inventory", Some(index)) if (index as usize) < EngineConfig::INVENTORY_CAPACITY => {
                Ok(SlotId::Inventory(index as u8))
            }
            ("store", Some(index)) => Ok(SlotId::Store(index)),
            ("stash", index) => Ok(SlotId::Stash(index.unwrap_or(0))),
            ("sell", None) => Ok(SlotId::Sell),
            ("trash", None) => Ok(SlotId::Trash),
            (other, None) => other
                .parse::<EquipSlot>()
                .map(SlotId::Equipment)
                .map_err(|_| unknown()),
            _ => Err(unknown()),
        }
    }
}

/// Slot classification failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotError {
    #[error("unknown slot identity '{0}'")]
    UnknownSlot(String),
}

impl GameError for SlotError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            SlotError::UnknownSlot(_) => "SLOT_UNKNOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn parses_every_slot_family() {
        assert_eq!("inventory:14".parse::<SlotId>(), Ok(SlotId::Inventory(14)));
        assert_eq!("store:3".parse::<SlotId>(), Ok(SlotId::Store(3)));
        assert_eq!("stash".parse::<SlotId>(), Ok(SlotId::Stash(0)));
        assert_eq!("stash:7".parse::<SlotId>(), Ok(SlotId::Stash(7)));
        assert_eq!("sell".parse::<SlotId>(), Ok(SlotId::Sell));
        assert_eq!("Trash".parse::<SlotId>(), Ok(SlotId::Trash));
        assert_eq!(
            "weapon2".parse::<SlotId>(),
            Ok(SlotId::Equipment(EquipSlot::Weapon2))
        );
        assert_eq!("boots".parse::<SlotId>(), Ok(SlotId::Equipment(EquipSlot::Boots)));
    }

    #[test]
    fn rejects_unknown_identities() {
        for raw in ["inventory:15", "inventory", "weapon4", "sell:1", "ring", "store:x"] {
            assert_eq!(
                raw.parse::<SlotId>(),
                Err(SlotError::UnknownSlot(raw.to_owned())),
                "{raw} should not classify"
            );
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let slots = [
            SlotId::Inventory(4),
            SlotId::Store(0),
            SlotId::Sell,
            SlotId::Stash(2),
            SlotId::Trash,
        ]
        .into_iter()
        .chain(EquipSlot::iter().map(SlotId::Equipment));

        for slot in slots {
            assert_eq!(slot.to_string().parse::<SlotId>(), Ok(slot));
        }
    }

    #[test]
    fn classification_predicates() {
        let weapon = SlotId::Equipment(EquipSlot::Weapon3);
        let chest = SlotId::Equipment(EquipSlot::Chest);

        assert_eq!(classify(weapon), (ContainerKind::Equipment, Some(EquipSlot::Weapon3)));
        assert_eq!(classify(SlotId::Trash), (ContainerKind::Trash, None));
        assert!(weapon.is_weapon_slot() && !weapon.is_armor_slot());
        assert!(chest.is_armor_slot() && chest.is_any_equipment_slot());
        assert!(!SlotId::Inventory(0).is_any_equipment_slot());
    }

    #[test]
    fn armor_slots_lock_to_one_type() {
        for slot in ArmorSlot::iter() {
            for kind in ArmorType::iter() {
                assert_eq!(slot.accepts(kind), slot.armor_type() == kind);
            }
            assert!(!slot.accepts(ArmorType::Amulet));
        }
    }
}
