//! Player attribute blocks.
//!
//! Base attributes are stored; modified attributes and combat totals are
//! derived from base + the grants of active equipment and recomputed after
//! every applied action.

use core::ops::AddAssign;

use crate::env::StatGrants;

/// Strength, dexterity and intelligence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub strength: i32,
    pub dexterity: i32,
    pub intelligence: i32,
}

impl Attributes {
    pub fn new(strength: i32, dexterity: i32, intelligence: i32) -> Self {
        Self {
            strength,
            dexterity,
            intelligence,
        }
    }
}

impl AddAssign<&StatGrants> for Attributes {
    fn add_assign(&mut self, grants: &StatGrants) {
        self.strength += grants.strength;
        self.dexterity += grants.dexterity;
        self.intelligence += grants.intelligence;
    }
}

/// Equipment-derived combat totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatTotals {
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

impl AddAssign<&StatGrants> for CombatTotals {
    fn add_assign(&mut self, grants: &StatGrants) {
        self.armor_pen += grants.armor_pen;
        self.magic_pen += grants.magic_pen;
        self.crit_chance += grants.crit_chance;
        self.crit_damage += grants.crit_damage;
        self.bonus_physical += grants.bonus_physical;
        self.bonus_magical += grants.bonus_magical;
        self.bonus_gold += grants.bonus_gold;
        self.bonus_exp += grants.bonus_exp;
        self.item_find += grants.item_find;
        self.magic_find += grants.magic_find;
    }
}
