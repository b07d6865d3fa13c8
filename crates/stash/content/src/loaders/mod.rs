//! Content loaders for reading session data from files.
//!
//! Each loader converts one RON/TOML file into stash-core types. Parsing
//! failures are reported through `anyhow` with the offending path attached.

pub mod config;
pub mod factory;
pub mod item;
pub mod loadout;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::{ItemCatalog, ItemLoader};
pub use loadout::{Loadout, LoadoutLoader, LoadoutSlot};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
