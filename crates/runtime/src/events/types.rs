//! Event types for different topics.

use serde::{Deserialize, Serialize};
use stash_core::{
    Action, Command, ExecutionReport, FeedbackCue, NoOpReason, RejectReason, StateDelta,
    TransferOutcome, TransitionPhase, UnresolvedReason,
};

/// Outcome of one player command, published after it has been processed.
///
/// `command` is `None` when the request could not be parsed into one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferEvent {
    /// The command changed the player.
    Applied {
        command: Option<Command>,
        action: Action,
        delta: StateDelta,
        gold: u64,
    },

    /// A rule matched but a precondition failed.
    Rejected {
        command: Option<Command>,
        reason: RejectReason,
    },

    /// Recognised drop that intentionally did nothing.
    Ignored {
        command: Option<Command>,
        reason: NoOpReason,
    },

    /// No rule applied.
    Unresolved {
        command: Option<Command>,
        reason: UnresolvedReason,
    },

    /// Internal fault; the player was left unchanged.
    Failed {
        command: Option<Command>,
        phase: TransitionPhase,
        error: String,
    },
}

impl TransferEvent {
    pub fn from_report(command: Option<Command>, report: &ExecutionReport) -> Self {
        match &report.outcome {
            TransferOutcome::Applied(action) => TransferEvent::Applied {
                command,
                action: *action,
                delta: report.delta.clone(),
                gold: report.gold,
            },
            TransferOutcome::Rejected(reason) => TransferEvent::Rejected {
                command,
                reason: *reason,
            },
            TransferOutcome::NoOp(reason) => TransferEvent::Ignored {
                command,
                reason: *reason,
            },
            TransferOutcome::Unresolved(reason) => TransferEvent::Unresolved {
                command,
                reason: reason.clone(),
            },
        }
    }

    /// Sound cue a presentation layer should play for this event.
    pub fn cue(&self) -> FeedbackCue {
        match self {
            TransferEvent::Applied { .. } => FeedbackCue::Success,
            TransferEvent::Rejected { .. } | TransferEvent::Failed { .. } => FeedbackCue::Failure,
            TransferEvent::Ignored { .. } | TransferEvent::Unresolved { .. } => {
                FeedbackCue::Silent
            }
        }
    }
}

/// Session lifecycle and persistence events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    Saved { session_id: String },
    Loaded { session_id: String },
    PersistenceFailed { session_id: String, error: String },
}
