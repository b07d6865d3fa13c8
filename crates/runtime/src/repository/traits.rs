//! Repository contract for saving and loading player state.

use stash_core::PlayerState;

use super::Result;

/// Repository for player persistence, keyed by session id.
///
/// Saves replace the previous snapshot for the session; there is no history.
pub trait PlayerRepository: Send + Sync {
    fn save(&self, session_id: &str, player: &PlayerState) -> Result<()>;

    fn load(&self, session_id: &str) -> Result<Option<PlayerState>>;

    fn exists(&self, session_id: &str) -> bool;

    fn delete(&self, session_id: &str) -> Result<()>;

    /// List all stored session ids, sorted.
    fn list_sessions(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}
