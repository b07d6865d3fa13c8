use stash_content::ContentFactory;
use stash_core::{
    EquipSlot, ItemDefinition, ItemHandle, ItemOracle, RequirementRule, WeaponSlot, can_equip,
};

struct Catalog(Vec<ItemDefinition>);

impl ItemOracle for Catalog {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.0.iter().find(|item| item.handle == handle)
    }

    fn all_definitions(&self) -> Vec<&ItemDefinition> {
        self.0.iter().collect()
    }
}

#[test]
fn bundled_content_builds_a_valid_player() {
    let factory = ContentFactory::bundled();

    let config = factory.load_config().expect("config should parse");
    assert_eq!(config.requirement_rule, RequirementRule::LevelAndAnyAttribute);

    let catalog = factory.load_catalog().expect("catalog should parse");
    assert!(!catalog.store.is_empty());

    let loadout = factory.load_loadout().expect("loadout should parse");
    let player = loadout
        .into_player(&Catalog(catalog.items))
        .expect("loadout should be consistent");

    assert_eq!(player.gold, 150);
    assert_eq!(player.equipment.equipped_weapon, Some(WeaponSlot::Weapon1));
    assert!(player.equipment.get(EquipSlot::Head).is_some());
    // base 6 dexterity + leather cap
    assert_eq!(player.modified.dexterity, 7);
    assert_eq!(player.totals.bonus_physical, 3);
}

#[test]
fn gated_items_state_every_attribute_threshold() {
    let factory = ContentFactory::bundled();
    let config = factory.load_config().expect("config should parse");
    let catalog = Catalog(factory.load_catalog().expect("catalog should parse").items);

    for item in &catalog.0 {
        let required = item.requirements;
        let gated = required.strength > 0 || required.dexterity > 0 || required.intelligence > 0;
        if gated {
            assert!(
                required.strength > 0 && required.dexterity > 0 && required.intelligence > 0,
                "{} leaves an attribute threshold at 0",
                item.name
            );
        }
    }

    let player = factory
        .load_loadout()
        .expect("loadout should parse")
        .into_player(&catalog)
        .expect("loadout should be consistent");
    // Dexterity 7 falls short of the bow's 8.
    let bow = catalog.definition(ItemHandle(2)).expect("hunting bow");
    assert!(!can_equip(&player, bow, config.requirement_rule));
    // Strength 8 clears the leggings' 6.
    let leggings = catalog.definition(ItemHandle(12)).expect("chain leggings");
    assert!(can_equip(&player, leggings, config.requirement_rule));
}
