use crate::state::ItemHandle;

pub trait ItemOracle: Send + Sync {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition>;

    /// Returns all item definitions available in this oracle.
    fn all_definitions(&self) -> Vec<&ItemDefinition>;
}

/// Immutable item template supplied by the catalog.
///
/// # Design: Base + Class Pattern
///
/// - Base struct holds the fields shared by every item (values, requirements, grants)
/// - `class` is a tagged variant: weapons carry no armor type, armor carries exactly one
/// - Display data (name, flavor text, sprite) is carried but never interpreted by the engine
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub name: String,
    pub class: ItemClass,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rarity: Rarity,
    /// Gold debited on purchase.
    pub buy_value: u64,
    /// Gold credited on sale.
    pub sell_value: u64,
    pub item_level: u32,
    pub tier: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub requirements: Requirements,
    #[cfg_attr(feature = "serde", serde(default))]
    pub grants: StatGrants,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flavor: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sprite: String,
}

impl ItemDefinition {
    /// Creates a definition with no requirements, grants or display text.
    pub fn new(handle: ItemHandle, name: impl Into<String>, class: ItemClass) -> Self {
        Self {
            handle,
            name: name.into(),
            class,
            rarity: Rarity::Common,
            buy_value: 0,
            sell_value: 0,
            item_level: 1,
            tier: 1,
            requirements: Requirements::default(),
            grants: StatGrants::default(),
            flavor: String::new(),
            sprite: String::new(),
        }
    }

    pub fn with_values(mut self, buy_value: u64, sell_value: u64) -> Self {
        self.buy_value = buy_value;
        self.sell_value = sell_value;
        self
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn with_requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = requirements;
        self
    }

    pub fn with_grants(mut self, grants: StatGrants) -> Self {
        self.grants = grants;
        self
    }

    pub fn is_weapon(&self) -> bool {
        self.class.is_weapon()
    }

    /// Armor type for armor items, `None` for weapons.
    pub fn armor_type(&self) -> Option<ArmorType> {
        self.class.armor_type()
    }
}

/// Item class tag. Weapons never carry an armor type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemClass {
    Weapon,
    Armor(ArmorType),
}

impl ItemClass {
    pub fn is_weapon(&self) -> bool {
        matches!(self, ItemClass::Weapon)
    }

    pub fn armor_type(&self) -> Option<ArmorType> {
        match self {
            ItemClass::Weapon => None,
            ItemClass::Armor(kind) => Some(*kind),
        }
    }

    /// Short label for tooltips and logs.
    pub fn label(&self) -> &'static str {
        match self {
            ItemClass::Weapon => "weapon",
            ItemClass::Armor(kind) => (*kind).into(),
        }
    }
}

/// Armor sub-type. Amulets exist in the catalog but no armor slot accepts them.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArmorType {
    Head,
    Chest,
    Legs,
    Gloves,
    Boots,
    Amulet,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// RGB colour conventionally used for the item's name.
    pub const fn color(&self) -> [u8; 3] {
        match self {
            Rarity::Common => [0xff, 0xff, 0xff],
            Rarity::Uncommon => [0x1e, 0xff, 0x00],
            Rarity::Rare => [0x00, 0x70, 0xdd],
            Rarity::Epic => [0xa3, 0x35, 0xee],
            Rarity::Legendary => [0xff, 0x80, 0x00],
        }
    }
}

/// Thresholds a player must meet to equip an item.
///
/// An omitted threshold defaults to 0, which every player meets. Under
/// [`RequirementRule::LevelAndAnyAttribute`] a single 0 attribute therefore
/// satisfies the attribute clause, so gated items list all three.
///
/// [`RequirementRule::LevelAndAnyAttribute`]: crate::config::RequirementRule::LevelAndAnyAttribute
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Requirements {
    pub level: u32,
    pub strength: i32,
    pub dexterity: i32,
    pub intelligence: i32,
}

impl Requirements {
    pub fn new(level: u32, strength: i32, dexterity: i32, intelligence: i32) -> Self {
        Self {
            level,
            strength,
            dexterity,
            intelligence,
        }
    }
}

/// Flat stat bonuses granted while an item is equipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatGrants {
    pub strength: i32,
    pub dexterity: i32,
    pub intelligence: i32,
    pub armor_pen: i32,
    pub magic_pen: i32,
    pub crit_chance: i32,
    pub crit_damage: i32,
    pub bonus_physical: i32,
    pub bonus_magical: i32,
    pub bonus_gold: i32,
    pub bonus_exp: i32,
    pub item_find: i32,
    pub magic_find: i32,
}

impl StatGrants {
    /// Creates grants that only touch the three attributes.
    pub fn attributes(strength: i32, dexterity: i32, intelligence: i32) -> Self {
        Self {
            strength,
            dexterity,
            intelligence,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weapon_class_has_no_armor_type() {
        let sword = ItemDefinition::new(ItemHandle(1), "Sword", ItemClass::Weapon);
        assert!(sword.is_weapon());
        assert_eq!(sword.armor_type(), None);

        let helm = ItemDefinition::new(ItemHandle(2), "Helm", ItemClass::Armor(ArmorType::Head));
        assert!(!helm.is_weapon());
        assert_eq!(helm.armor_type(), Some(ArmorType::Head));
        assert_eq!(helm.class.label(), "head");
    }

    #[test]
    fn armor_type_parses_case_insensitively() {
        assert_eq!("Gloves".parse::<ArmorType>(), Ok(ArmorType::Gloves));
        assert_eq!("amulet".parse::<ArmorType>(), Ok(ArmorType::Amulet));
        assert!("ring".parse::<ArmorType>().is_err());
    }

    #[test]
    fn rarity_drives_name_colour() {
        let charm = ItemDefinition::new(ItemHandle(3), "Charm", ItemClass::Armor(ArmorType::Amulet))
            .with_rarity(Rarity::Legendary);
        assert_eq!(charm.rarity.color(), [0xff, 0x80, 0x00]);
        assert_eq!(Rarity::default().color(), [0xff, 0xff, 0xff]);
        assert!(Rarity::Epic > Rarity::Rare);
    }
}
