//! Deterministic inventory, stash and equipment rules for a single player.
//!
//! `stash-core` defines the canonical transfer rules (slot classification,
//! requirement checks, action resolution and mutation) and exposes pure APIs
//! that presentation layers and the session runtime reuse. All player state
//! mutation flows through [`engine::TransferEngine`], and supporting crates
//! depend on the types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod requirements;
pub mod slot;
pub mod state;

pub use action::{
    Action, ApplyError, Command, FeedbackCue, NoOpReason, RejectReason, Resolution, ResolveInput,
    TransferOutcome, TransferRequest, UnresolvedReason, resolve,
};
pub use config::{EngineConfig, InvariantPolicy, RequirementRule};
pub use engine::{
    ExecuteError, ExecutionReport, TransferEngine, TransitionPhase, TransitionPhaseError,
};
pub use env::{
    ArmorType, Env, ItemClass, ItemDefinition, ItemOracle, OracleError, Rarity, Requirements,
    StatGrants, StoreOracle, TransferEnv,
};
pub use error::{ErrorSeverity, GameError};
pub use requirements::can_equip;
pub use slot::{
    ArmorSlot, ContainerKind, EquipSlot, SlotError, SlotFamily, SlotId, WeaponSlot, classify,
};
pub use state::{
    Attributes, CombatTotals, Equipment, InstanceId, InvariantViolation, InventoryState,
    ItemHandle, ItemInstance, PlayerFields, PlayerState, StashState, StateDelta,
};
