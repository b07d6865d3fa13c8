pub mod equipment;
pub mod inventory;
pub mod item;
pub mod stash;
pub mod stats;

pub use equipment::Equipment;
pub use inventory::InventoryState;
pub use item::{InstanceId, ItemHandle, ItemInstance};
pub use stash::StashState;
pub use stats::{Attributes, CombatTotals};
