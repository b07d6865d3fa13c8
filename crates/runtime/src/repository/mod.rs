//! Persistence adapters for player state.
//!
//! Player snapshots are dynamic data owned by the session; content (catalog,
//! store, loadout) is loaded separately by `stash-content`.
mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FilePlayerRepository;
pub use memory::InMemoryPlayerRepo;
pub use traits::PlayerRepository;
