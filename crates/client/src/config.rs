//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings for one interactive session.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Directory holding `items.ron`, `loadout.ron` and `config.toml`.
    /// Bundled content is used when unset.
    pub content_dir: Option<PathBuf>,
    /// Where saves are written. Platform data directory when unset.
    pub save_dir: Option<PathBuf>,
    pub session_id: Option<String>,
    pub autosave: bool,
    pub command_buffer: Option<usize>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `STASH_CONTENT_DIR` - Content directory (default: bundled)
    /// - `STASH_SAVE_DIR` - Save directory (default: platform-specific)
    /// - `STASH_SESSION_ID` - Session identifier for saves (default: `default`)
    /// - `STASH_AUTOSAVE` - Save after every applied command (default: false)
    /// - `STASH_COMMAND_BUFFER` - Command queue size (default: 32)
    pub fn from_env() -> Self {
        let mut config = Self {
            content_dir: env::var("STASH_CONTENT_DIR").ok().map(PathBuf::from),
            save_dir: env::var("STASH_SAVE_DIR").ok().map(PathBuf::from),
            session_id: env::var("STASH_SESSION_ID").ok(),
            ..Self::default()
        };

        if let Some(enable) = read_env::<bool>("STASH_AUTOSAVE") {
            config.autosave = enable;
        } else if env::var("STASH_AUTOSAVE").is_ok() {
            // Accept a bare variable as "true"
            config.autosave = true;
        }

        config.command_buffer = read_env::<usize>("STASH_COMMAND_BUFFER").map(|n| n.max(1));

        config
    }

    pub fn session_id(&self) -> &str {
        self.session_id.as_deref().unwrap_or("default")
    }

    /// Save directory, falling back to the platform data directory.
    pub fn save_dir(&self) -> PathBuf {
        self.save_dir.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("", "", "stash")
                .map(|dirs| dirs.data_dir().join("saves"))
                .unwrap_or_else(|| PathBuf::from("./save_data"))
        })
    }
}

/// Platform log directory (`~/.cache/stash/logs` on Linux).
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "stash")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("/tmp/stash/logs"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
