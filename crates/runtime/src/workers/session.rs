//! Session worker that owns the authoritative [`stash_core::PlayerState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle) one at a
//! time, executes them through [`stash_core::TransferEngine`], and publishes
//! [`TransferEvent`] notifications. Processing strictly in channel order is
//! what serializes concurrent callers.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use stash_core::{
    Command, EngineConfig, ExecuteError, ExecutionReport, GameError, PlayerState,
    TransferEngine, TransferEnv, TransferRequest,
};

use crate::api::{Result, RuntimeError};
use crate::events::{Event, EventBus, SessionEvent, TransferEvent};
use crate::oracle::OracleManager;
use crate::repository::PlayerRepository;

/// Commands that can be sent to the session worker
pub enum WorkerCommand {
    /// Execute a typed player command.
    Execute {
        command: Command,
        reply: oneshot::Sender<Result<ExecutionReport>>,
    },
    /// Execute a transfer addressed by slot text.
    ExecuteNamed {
        source: String,
        target: String,
        reply: oneshot::Sender<Result<ExecutionReport>>,
    },
    /// Query the current player (read-only).
    QueryState { reply: oneshot::Sender<PlayerState> },
    Save { reply: oneshot::Sender<Result<()>> },
    Load { reply: oneshot::Sender<Result<bool>> },
}

/// Persistence settings for one session.
pub struct SessionStore {
    pub session_id: String,
    pub repository: Option<Arc<dyn PlayerRepository>>,
    pub autosave: bool,
}

/// Background task that processes player commands.
pub struct SessionWorker {
    player: PlayerState,
    config: EngineConfig,
    oracles: OracleManager,
    store: SessionStore,
    command_rx: mpsc::Receiver<WorkerCommand>,
    event_bus: EventBus,
}

impl SessionWorker {
    pub fn new(
        player: PlayerState,
        config: EngineConfig,
        oracles: OracleManager,
        store: SessionStore,
        command_rx: mpsc::Receiver<WorkerCommand>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            player,
            config,
            oracles,
            store,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop. Ends when every handle has been dropped.
    pub async fn run(mut self) {
        debug!(session = %self.store.session_id, "session worker started");
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        debug!(session = %self.store.session_id, "session worker stopped");
    }

    fn handle_command(&mut self, cmd: WorkerCommand) {
        match cmd {
            WorkerCommand::Execute { command, reply } => {
                let result = self.execute(Some(command), |engine, env| {
                    engine.execute(env, &command)
                });
                let _ = reply.send(result);
            }
            WorkerCommand::ExecuteNamed {
                source,
                target,
                reply,
            } => {
                let command = TransferRequest::parse(&source, &target)
                    .ok()
                    .map(Command::Transfer);
                let result = self.execute(command, |engine, env| {
                    engine.transfer_named(env, &source, &target)
                });
                let _ = reply.send(result);
            }
            WorkerCommand::QueryState { reply } => {
                let _ = reply.send(self.player.clone());
            }
            WorkerCommand::Save { reply } => {
                let _ = reply.send(self.save());
            }
            WorkerCommand::Load { reply } => {
                let _ = reply.send(self.load());
            }
        }
    }

    fn execute<F>(&mut self, command: Option<Command>, run: F) -> Result<ExecutionReport>
    where
        F: FnOnce(
            &mut TransferEngine<'_>,
            TransferEnv<'_>,
        ) -> std::result::Result<ExecutionReport, ExecuteError>,
    {
        let env = self.oracles.as_transfer_env();
        let mut engine = TransferEngine::new(&mut self.player, self.config);

        match run(&mut engine, env) {
            Ok(report) => {
                let event = TransferEvent::from_report(command, &report);
                self.event_bus.publish(Event::Transfer(event));

                if report.outcome.is_applied() && self.store.autosave {
                    self.autosave();
                }
                Ok(report)
            }
            Err(err) => {
                error!(
                    target: "runtime::worker",
                    command = ?command,
                    phase = err.phase().as_str(),
                    code = err.error_code(),
                    error = %err,
                    "command failed; player unchanged"
                );
                self.event_bus
                    .publish(Event::Transfer(TransferEvent::Failed {
                        command,
                        phase: err.phase(),
                        error: err.to_string(),
                    }));
                Err(RuntimeError::Execute(err))
            }
        }
    }

    fn repository(&self) -> Result<&Arc<dyn PlayerRepository>> {
        self.store.repository.as_ref().ok_or(RuntimeError::NoRepository)
    }

    fn save(&self) -> Result<()> {
        let session_id = self.store.session_id.clone();
        match self.repository()?.save(&session_id, &self.player) {
            Ok(()) => {
                info!(session = %session_id, "player saved");
                self.event_bus
                    .publish(Event::Session(SessionEvent::Saved { session_id }));
                Ok(())
            }
            Err(err) => {
                self.event_bus
                    .publish(Event::Session(SessionEvent::PersistenceFailed {
                        session_id,
                        error: err.to_string(),
                    }));
                Err(err.into())
            }
        }
    }

    fn autosave(&self) {
        if let Err(err) = self.save() {
            warn!(session = %self.store.session_id, error = %err, "autosave failed");
        }
    }

    fn load(&mut self) -> Result<bool> {
        let session_id = self.store.session_id.clone();
        let Some(player) = self.repository()?.load(&session_id)? else {
            return Ok(false);
        };

        player
            .validate(self.oracles.items())
            .map_err(|violation| RuntimeError::CorruptedPlayer {
                session_id: session_id.clone(),
                reason: violation.to_string(),
            })?;

        self.player = player;
        info!(session = %session_id, "player loaded");
        self.event_bus
            .publish(Event::Session(SessionEvent::Loaded { session_id }));
        Ok(true)
    }
}
