//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! executing player commands or streaming events from specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use stash_core::{Command, ExecutionReport, PlayerState, SlotId, TransferRequest, WeaponSlot};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::WorkerCommand;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<WorkerCommand>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<WorkerCommand>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> WorkerCommand,
    ) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Execute a player command.
    ///
    /// Rejections are reported in the returned outcome, not as errors.
    pub async fn execute(&self, command: Command) -> Result<ExecutionReport> {
        self.request(|reply| WorkerCommand::Execute { command, reply })
            .await?
    }

    /// Drag the item at `source` onto `target`.
    pub async fn transfer(&self, source: SlotId, target: SlotId) -> Result<ExecutionReport> {
        self.execute(Command::Transfer(TransferRequest::new(source, target)))
            .await
    }

    /// Drag using textual slot identities such as `inventory:3` or `head`.
    pub async fn transfer_named(
        &self,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Result<ExecutionReport> {
        let (source, target) = (source.into(), target.into());
        self.request(|reply| WorkerCommand::ExecuteNamed {
            source,
            target,
            reply,
        })
        .await?
    }

    pub async fn select_weapon(&self, slot: WeaponSlot) -> Result<ExecutionReport> {
        self.execute(Command::SelectWeapon(slot)).await
    }

    /// Query the current player (read-only snapshot)
    pub async fn query_state(&self) -> Result<PlayerState> {
        self.request(|reply| WorkerCommand::QueryState { reply })
            .await
    }

    /// Persist the current player to the session repository.
    pub async fn save(&self) -> Result<()> {
        self.request(|reply| WorkerCommand::Save { reply }).await?
    }

    /// Replace the current player with the saved one.
    ///
    /// Returns `false` if nothing was saved for this session.
    pub async fn load(&self) -> Result<bool> {
        self.request(|reply| WorkerCommand::Load { reply }).await?
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Transfer` - Outcome of every player command
    /// - `Topic::Session` - Save/load events
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }
}
