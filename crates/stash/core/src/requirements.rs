//! Equip requirement evaluation.
//!
//! Requirements are compared against the player's level and *modified*
//! attributes, so gear already worn can help meet the thresholds of new gear.

use crate::config::RequirementRule;
use crate::env::ItemDefinition;
use crate::state::PlayerState;

/// Returns true if `player` may equip `item` under `rule`.
pub fn can_equip(player: &PlayerState, item: &ItemDefinition, rule: RequirementRule) -> bool {
    let required = &item.requirements;
    let level = player.level >= required.level;
    let strength = player.modified.strength >= required.strength;
    let dexterity = player.modified.dexterity >= required.dexterity;
    let intelligence = player.modified.intelligence >= required.intelligence;

    match rule {
        RequirementRule::LevelAndAnyAttribute => level && (strength || dexterity || intelligence),
        RequirementRule::LegacyPrecedence => (level && strength) || dexterity || intelligence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ItemClass, Requirements};
    use crate::state::{Attributes, ItemHandle};

    fn staff(requirements: Requirements) -> ItemDefinition {
        ItemDefinition::new(ItemHandle(1), "Staff", ItemClass::Weapon)
            .with_requirements(requirements)
    }

    fn player(level: u32, strength: i32, dexterity: i32, intelligence: i32) -> PlayerState {
        PlayerState::new(0, level, Attributes::new(strength, dexterity, intelligence))
    }

    #[test]
    fn level_and_one_attribute_is_enough() {
        let item = staff(Requirements::new(5, 20, 20, 12));
        let mage = player(5, 3, 3, 12);

        assert!(can_equip(&mage, &item, RequirementRule::LevelAndAnyAttribute));
        assert!(can_equip(&mage, &item, RequirementRule::LegacyPrecedence));
    }

    #[test]
    fn high_dexterity_bypasses_level_only_under_legacy_rule() {
        let item = staff(Requirements::new(10, 20, 8, 20));
        let rogue = player(2, 3, 15, 3);

        assert!(!can_equip(&rogue, &item, RequirementRule::LevelAndAnyAttribute));
        assert!(can_equip(&rogue, &item, RequirementRule::LegacyPrecedence));
    }

    #[test]
    fn missing_every_attribute_fails_both_rules() {
        let item = staff(Requirements::new(1, 30, 30, 30));
        let novice = player(9, 10, 10, 10);

        assert!(!can_equip(&novice, &item, RequirementRule::LevelAndAnyAttribute));
        assert!(!can_equip(&novice, &item, RequirementRule::LegacyPrecedence));
    }

    #[test]
    fn strength_alone_needs_level_under_legacy_rule() {
        let item = staff(Requirements::new(8, 10, 40, 40));
        let brute = player(3, 25, 1, 1);

        assert!(!can_equip(&brute, &item, RequirementRule::LegacyPrecedence));
        assert!(!can_equip(&brute, &item, RequirementRule::LevelAndAnyAttribute));
    }

    #[test]
    fn modified_attributes_count() {
        let item = staff(Requirements::new(1, 15, 99, 99));
        let mut wearer = player(1, 10, 0, 0);
        wearer.modified.strength = 15;

        assert!(can_equip(&wearer, &item, RequirementRule::LevelAndAnyAttribute));
    }

    #[test]
    fn omitted_threshold_is_always_met() {
        let item = staff(Requirements {
            level: 5,
            dexterity: 30,
            ..Requirements::default()
        });
        let clumsy = player(5, 0, 1, 0);

        assert!(can_equip(&clumsy, &item, RequirementRule::LevelAndAnyAttribute));
        assert!(!can_equip(&player(4, 0, 1, 0), &item, RequirementRule::LevelAndAnyAttribute));
    }
}
