//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the RON/TOML data files a session starts
//! from:
//! - Item catalog and store offers (RON)
//! - Starting loadout (RON), resolved into a [`stash_core::PlayerState`]
//! - Engine configuration (TOML)
//!
//! Catalog content is consumed by runtime oracles and never appears in player
//! state; only item handles do.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, ItemCatalog, ItemLoader, LoadResult, Loadout, LoadoutLoader,
    LoadoutSlot,
};
