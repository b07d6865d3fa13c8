//! Session orchestration for the inventory transfer engine.
//!
//! This crate wires together oracle access, repositories, and the session
//! worker into a cohesive runtime API. Consumers embed [`Runtime`] to execute
//! player commands, subscribe to events, and save or load the player through
//! [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for presentation sync
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
//! - `workers` keeps the session task internal to the crate
pub mod api;
pub mod events;
pub mod oracle;
pub mod repository;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{Event, EventBus, SessionEvent, Topic, TransferEvent};
pub use oracle::{ItemOracleImpl, OracleManager, StoreOracleImpl};
pub use repository::{
    FilePlayerRepository, InMemoryPlayerRepo, PlayerRepository, RepositoryError,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
