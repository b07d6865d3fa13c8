//! Worker tasks that back the runtime orchestration.
//!
//! The session worker is the single owner of the player and executes every
//! command in arrival order.

mod session;

pub use session::{SessionStore, SessionWorker, WorkerCommand};
