//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, repositories and the transfer
//! engine so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use stash_core::ExecuteError;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error("no player provided and none saved for session '{0}'")]
    MissingPlayer(String),

    #[error("no repository configured for session persistence")]
    NoRepository,

    #[error("loaded player for session '{session_id}' is inconsistent: {reason}")]
    CorruptedPlayer { session_id: String, reason: String },
}
