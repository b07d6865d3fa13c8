//! In-memory PlayerRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use stash_core::PlayerState;

use super::{PlayerRepository, RepositoryError, Result};

#[derive(Default)]
pub struct InMemoryPlayerRepo {
    players: RwLock<HashMap<String, PlayerState>>,
}

impl InMemoryPlayerRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a player already stored under `session_id`.
    pub fn with_player(session_id: impl Into<String>, player: PlayerState) -> Self {
        let mut players = HashMap::new();
        players.insert(session_id.into(), player);
        Self {
            players: RwLock::new(players),
        }
    }
}

impl PlayerRepository for InMemoryPlayerRepo {
    fn save(&self, session_id: &str, player: &PlayerState) -> Result<()> {
        let mut players = self
            .players
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        players.insert(session_id.to_owned(), player.clone());
        Ok(())
    }

    fn load(&self, session_id: &str) -> Result<Option<PlayerState>> {
        let players = self
            .players
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(players.get(session_id).cloned())
    }

    fn exists(&self, session_id: &str) -> bool {
        self.players
            .read()
            .map(|players| players.contains_key(session_id))
            .unwrap_or(false)
    }

    fn delete(&self, session_id: &str) -> Result<()> {
        let mut players = self
            .players
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        players.remove(session_id);
        Ok(())
    }

    fn list_sessions(&self) -> Result<Vec<String>> {
        let players = self
            .players
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut sessions: Vec<String> = players.keys().cloned().collect();
        sessions.sort_unstable();
        Ok(sessions)
    }
}
