//! File-based PlayerRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use stash_core::PlayerState;

use super::{PlayerRepository, RepositoryError, Result};

/// Stores each session's player as `player_{session_id}.bin` in bincode.
///
/// Writes go to a temporary file that is renamed over the old snapshot, so a
/// crash mid-save leaves the previous snapshot intact.
pub struct FilePlayerRepository {
    base_dir: PathBuf,
}

impl FilePlayerRepository {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn player_path(&self, session_id: &str) -> Result<PathBuf> {
        let valid = !session_id.is_empty()
            && session_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(RepositoryError::InvalidSessionId(session_id.to_owned()));
        }
        Ok(self.base_dir.join(format!("player_{}.bin", session_id)))
    }
}

impl PlayerRepository for FilePlayerRepository {
    fn save(&self, session_id: &str, player: &PlayerState) -> Result<()> {
        let path = self.player_path(session_id)?;
        let temp_path = path.with_extension("bin.tmp");

        let bytes = bincode::serialize(player)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved player[{}] to {}", session_id, path.display());

        Ok(())
    }

    fn load(&self, session_id: &str) -> Result<Option<PlayerState>> {
        let path = self.player_path(session_id)?;

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let player: PlayerState = bincode::deserialize(&bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        tracing::debug!("Loaded player[{}] from {}", session_id, path.display());

        Ok(Some(player))
    }

    fn exists(&self, session_id: &str) -> bool {
        self.player_path(session_id)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    fn delete(&self, session_id: &str) -> Result<()> {
        let path = self.player_path(session_id)?;

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted player[{}]", session_id);
        }

        Ok(())
    }

    fn list_sessions(&self) -> Result<Vec<String>> {
        let mut sessions = Vec::new();

        for entry in fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)? {
            let path = entry.map_err(RepositoryError::Io)?.path();

            if let Some(session) = path
                .file_name()
                .and_then(|s| s.to_str())
                .and_then(|s| s.strip_prefix("player_"))
                .and_then(|s| s.strip_suffix(".bin"))
            {
                sessions.push(session.to_owned());
            }
        }

        sessions.sort_unstable();
        Ok(sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stash_core::{Attributes, EquipSlot, ItemHandle};

    fn sample() -> PlayerState {
        let mut player = PlayerState::new(321, 4, Attributes::new(5, 6, 7));
        let sword = player.allocate_instance(ItemHandle(1));
        player.equipment.replace(EquipSlot::Weapon2, sword);
        let cap = player.allocate_instance(ItemHandle(2));
        player.inventory.put(7, cap).unwrap();
        let boots = player.allocate_instance(ItemHandle(3));
        player.stash.push(boots);
        player
    }

    #[test]
    fn save_then_load_preserves_player() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FilePlayerRepository::new(dir.path()).unwrap();
        assert_eq!(repo.base_dir(), dir.path());
        let player = sample();

        repo.save("alpha", &player).unwrap();

        assert!(repo.exists("alpha"));
        assert_eq!(repo.load("alpha").unwrap(), Some(player));
        assert_eq!(repo.list_sessions().unwrap(), vec!["alpha".to_owned()]);
    }

    #[test]
    fn missing_session_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FilePlayerRepository::new(dir.path()).unwrap();
        assert_eq!(repo.load("nobody").unwrap(), None);
    }

    #[test]
    fn path_like_session_ids_are_refused() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FilePlayerRepository::new(dir.path()).unwrap();

        let err = repo.save("../escape", &sample()).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidSessionId(_)));
        assert!(!repo.exists("../escape"));
    }

    #[test]
    fn delete_removes_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FilePlayerRepository::new(dir.path()).unwrap();
        repo.save("beta", &sample()).unwrap();

        repo.delete("beta").unwrap();

        assert!(!repo.exists("beta"));
        assert!(repo.list_sessions().unwrap().is_empty());
    }
}
