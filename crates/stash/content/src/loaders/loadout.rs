//! Starting loadout loader.
//!
//! A loadout names the gold, level, base attributes and held items a new
//! player begins with. Items are given fresh instance ids in file order.

use std::path::Path;

use serde::{Deserialize, Serialize};
use stash_core::{Attributes, ItemHandle, ItemOracle, PlayerState, SlotId, WeaponSlot};
use strum::IntoEnumIterator;

use crate::loaders::{LoadResult, read_file};

/// One starting item and where it goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadoutSlot {
    pub slot: SlotId,
    pub item: ItemHandle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    pub gold: u64,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub base: Attributes,
    #[serde(default)]
    pub items: Vec<LoadoutSlot>,
    /// Weapon in hand. Defaults to the first occupied weapon slot.
    #[serde(default)]
    pub equipped_weapon: Option<WeaponSlot>,
}

fn default_level() -> u32 {
    1
}

impl Loadout {
    /// Builds a validated player from this loadout.
    ///
    /// Fails if an item is unknown to `items`, two entries share a slot, an
    /// entry targets a slot players cannot hold items in, or the result
    /// breaks a state invariant (e.g. a helmet in the chest slot).
    pub fn into_player<I>(&self, items: &I) -> LoadResult<PlayerState>
    where
        I: ItemOracle + ?Sized,
    {
        let mut player = PlayerState::new(self.gold, self.level, self.base);

        for entry in &self.items {
            if items.definition(entry.item).is_none() {
                anyhow::bail!("Loadout references unknown item {:?}", entry.item);
            }
            let instance = player.allocate_instance(entry.item);

            match entry.slot {
                SlotId::Inventory(index) => match player.inventory.put(index as usize, instance) {
                    Ok(None) => {}
                    Ok(Some(_)) => anyhow::bail!("Loadout fills {} twice", entry.slot),
                    Err(_) => anyhow::bail!("Loadout slot {} is out of range", entry.slot),
                },
                SlotId::Stash(_) => player.stash.push(instance),
                SlotId::Equipment(slot) => {
                    if player.equipment.replace(slot, instance).is_some() {
                        anyhow::bail!("Loadout fills {} twice", entry.slot);
                    }
                }
                other => anyhow::bail!("Loadout cannot place items in {}", other),
            }
        }

        player.equipment.equipped_weapon = self
            .equipped_weapon
            .or_else(|| WeaponSlot::iter().find(|slot| player.equipment.weapon(*slot).is_some()));

        player.recompute_stats(items)?;
        player.validate(items)?;
        Ok(player)
    }
}

/// Loader for starting loadouts from RON files.
pub struct LoadoutLoader;

impl LoadoutLoader {
    pub fn load(path: &Path) -> LoadResult<Loadout> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Loadout> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse loadout RON: {}", e))
    }
}
