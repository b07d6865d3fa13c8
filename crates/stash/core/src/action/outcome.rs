//! Resolution and outcome types for transfer requests.
//!
//! Rejections, no-ops and unresolved drops are ordinary values: they leave
//! the player untouched and carry enough information for a presentation layer
//! to show feedback text and play a cue. Only internal faults surface as
//! errors (see [`crate::engine::ExecuteError`]).

use super::Action;
use crate::error::{ErrorSeverity, GameError};

/// The resolver's verdict for one request, before anything is mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    Apply(Action),
    Reject(RejectReason),
    NoOp(NoOpReason),
    Unresolved(UnresolvedReason),
}

/// What actually happened to a request after execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransferOutcome {
    Applied(Action),
    Rejected(RejectReason),
    NoOp(NoOpReason),
    Unresolved(UnresolvedReason),
}

impl TransferOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TransferOutcome::Applied(_))
    }

    pub fn action(&self) -> Option<&Action> {
        match self {
            TransferOutcome::Applied(action) => Some(action),
            _ => None,
        }
    }

    /// Sound cue a presentation layer should play.
    pub fn cue(&self) -> FeedbackCue {
        match self {
            TransferOutcome::Applied(_) => FeedbackCue::Success,
            TransferOutcome::Rejected(_) => FeedbackCue::Failure,
            TransferOutcome::NoOp(_) | TransferOutcome::Unresolved(_) => FeedbackCue::Silent,
        }
    }

    /// Feedback text for rejections; other outcomes are silent.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            TransferOutcome::Rejected(reason) => Some(reason.message()),
            _ => None,
        }
    }
}

impl From<Resolution> for TransferOutcome {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Apply(action) => TransferOutcome::Applied(action),
            Resolution::Reject(reason) => TransferOutcome::Rejected(reason),
            Resolution::NoOp(reason) => TransferOutcome::NoOp(reason),
            Resolution::Unresolved(reason) => TransferOutcome::Unresolved(reason),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeedbackCue {
    Success,
    Failure,
    Silent,
}

/// A rule matched but a precondition failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RejectReason {
    #[error("insufficient gold: need {required}, have {available}")]
    InsufficientGold { required: u64, available: u64 },

    #[error("requirements not met")]
    RequirementsNotMet,

    #[error("armor type does not fit this slot")]
    ArmorTypeMismatch,

    #[error("item must be unequipped first")]
    MustUnequipFirst,

    #[error("item must go to the inventory first")]
    MustGoToInventoryFirst,

    #[error("purchases must go to the inventory")]
    MustGoToInventory,

    #[error("inventory is full")]
    InventoryFull,

    #[error("only weapons fit weapon slots")]
    NotAWeapon,

    #[error("weapon slot is empty")]
    EmptyWeaponSlot,
}

impl RejectReason {
    /// Player-facing feedback line.
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::InsufficientGold { .. } => "Not enough gold.",
            RejectReason::RequirementsNotMet => "You do not meet the requirements.",
            RejectReason::ArmorTypeMismatch => "That does not go there.",
            RejectReason::MustUnequipFirst => "Unequip it first.",
            RejectReason::MustGoToInventoryFirst => "Move it to your inventory first.",
            RejectReason::MustGoToInventory => "Purchases go to your inventory.",
            RejectReason::InventoryFull => "Your inventory is full.",
            RejectReason::NotAWeapon => "Only weapons go there.",
            RejectReason::EmptyWeaponSlot => "There is no weapon in that slot.",
        }
    }
}

impl GameError for RejectReason {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            RejectReason::InsufficientGold { .. } => "REJECT_INSUFFICIENT_GOLD",
            RejectReason::RequirementsNotMet => "REJECT_REQUIREMENTS_NOT_MET",
            RejectReason::ArmorTypeMismatch => "REJECT_ARMOR_TYPE_MISMATCH",
            RejectReason::MustUnequipFirst => "REJECT_MUST_UNEQUIP_FIRST",
            RejectReason::MustGoToInventoryFirst => "REJECT_MUST_GO_TO_INVENTORY_FIRST",
            RejectReason::MustGoToInventory => "REJECT_MUST_GO_TO_INVENTORY",
            RejectReason::InventoryFull => "REJECT_INVENTORY_FULL",
            RejectReason::NotAWeapon => "REJECT_NOT_A_WEAPON",
            RejectReason::EmptyWeaponSlot => "REJECT_EMPTY_WEAPON_SLOT",
        }
    }
}

/// A recognised drop that intentionally changes nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoOpReason {
    /// Anything dropped onto the store.
    DropOnStore,
    /// A store offer dragged straight to the sell area.
    StoreToSell,
    /// The selected weapon slot is already in hand.
    AlreadyEquipped,
}

/// No rule matched, or the request could not be interpreted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnresolvedReason {
    #[error("unknown slot identity '{0}'")]
    UnknownSlot(String),

    #[error("nothing to move from the source slot")]
    EmptySource,

    #[error("no rule matches this drop")]
    NoMatchingRule,
}
