//! Item catalog loader.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use stash_core::{ItemDefinition, ItemHandle};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
///
/// `store` lists the handles on offer, in display order; `store:N` addresses
/// the N-th entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
    #[serde(default)]
    pub store: Vec<ItemHandle>,
}

impl ItemCatalog {
    /// Rejects duplicate handles and store offers the catalog does not define.
    pub fn validate(&self) -> LoadResult<()> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.handle) {
                anyhow::bail!("Duplicate item handle {:?} ({})", item.handle, item.name);
            }
        }

        for (index, handle) in self.store.iter().enumerate() {
            if !seen.contains(handle) {
                anyhow::bail!("Store offer {} references unknown item {:?}", index, handle);
            }
        }

        Ok(())
    }
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load and validate an item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        let catalog = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            items = catalog.items.len(),
            offers = catalog.store.len(),
            "loaded item catalog"
        );
        Ok(catalog)
    }

    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;
        catalog.validate()?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stash_core::{ArmorType, ItemClass};

    const CATALOG: &str = r#"
        (
            items: [
                (
                    handle: (1),
                    name: "Cap",
                    class: Armor(Head),
                    rarity: Rare,
                    buy_value: 20,
                    sell_value: 5,
                    item_level: 1,
                    tier: 1,
                    grants: (strength: 2),
                ),
                (
                    handle: (2),
                    name: "Dagger",
                    class: Weapon,
                    buy_value: 15,
                    sell_value: 4,
                    item_level: 1,
                    tier: 1,
                    requirements: (level: 2, dexterity: 5),
                ),
            ],
            store: [(2), (1)],
        )
    "#;

    #[test]
    fn parses_items_and_offers() {
        let catalog = ItemLoader::parse(CATALOG).unwrap();

        assert_eq!(catalog.items.len(), 2);
        assert_eq!(catalog.items[0].class, ItemClass::Armor(ArmorType::Head));
        assert_eq!(catalog.items[0].grants.strength, 2);
        assert_eq!(catalog.items[1].requirements.dexterity, 5);
        assert_eq!(catalog.store, vec![ItemHandle(2), ItemHandle(1)]);
    }

    #[test]
    fn rejects_offer_for_unknown_item() {
        let catalog = ItemCatalog {
            items: vec![],
            store: vec![ItemHandle(9)],
        };
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn rejects_duplicate_handles() {
        let item = ItemDefinition::new(ItemHandle(1), "Cap", ItemClass::Armor(ArmorType::Head));
        let catalog = ItemCatalog {
            items: vec![item.clone(), item],
            store: vec![],
        };
        assert!(catalog.validate().is_err());
    }
}
