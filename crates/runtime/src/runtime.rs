//! High-level runtime orchestrator.
//!
//! The runtime owns the session worker, wires up command/event channels, and
//! exposes a builder-based API for clients to drive a session.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use stash_core::{EngineConfig, PlayerState};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::oracle::OracleManager;
use crate::repository::PlayerRepository;
use crate::workers::{SessionStore, SessionWorker, WorkerCommand};

/// Runtime configuration shared across the orchestrator and worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub engine: EngineConfig,
    pub session_id: String,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Save after every applied command (requires a repository).
    pub autosave: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            session_id: "default".to_owned(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            autosave: false,
        }
    }
}

/// Main runtime that orchestrates one player session
///
/// Design: Runtime owns the worker and coordinates shutdown.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// Waits for queued commands to drain. Clones of the handle held
    /// elsewhere keep the worker alive until they are dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    player: Option<PlayerState>,
    oracles: Option<OracleManager>,
    repository: Option<Arc<dyn PlayerRepository>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            player: None,
            oracles: None,
            repository: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Player to start from when nothing is saved for the session.
    pub fn initial_player(mut self, player: PlayerState) -> Self {
        self.player = Some(player);
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Set the repository used for save, load and autosave.
    pub fn repository(mut self, repository: Arc<dyn PlayerRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Build the runtime
    ///
    /// A player saved under the session id takes precedence over
    /// [`initial_player`](Self::initial_player).
    pub async fn build(self) -> Result<Runtime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let session_id = self.config.session_id.clone();

        let saved = match &self.repository {
            Some(repository) => repository.load(&session_id)?,
            None => None,
        };

        let player = match (saved, self.player) {
            (Some(saved), _) => {
                saved
                    .validate(oracles.items())
                    .map_err(|violation| RuntimeError::CorruptedPlayer {
                        session_id: session_id.clone(),
                        reason: violation.to_string(),
                    })?;
                info!(session = %session_id, "resuming saved player");
                saved
            }
            (None, Some(player)) => player,
            (None, None) => return Err(RuntimeError::MissingPlayer(session_id)),
        };

        let (command_tx, command_rx) =
            mpsc::channel::<WorkerCommand>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let worker = SessionWorker::new(
            player,
            self.config.engine,
            oracles,
            SessionStore {
                session_id,
                repository: self.repository,
                autosave: self.config.autosave,
            },
            command_rx,
            event_bus,
        );

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            worker_handle,
        })
    }
}
