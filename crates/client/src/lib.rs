//! Interactive stash client.
//!
//! Composition root that loads content, builds the session runtime, and
//! drives it from a line-oriented shell.

pub mod bootstrap;
pub mod config;
pub mod logging;
pub mod shell;

pub use bootstrap::build_runtime;
pub use config::CliConfig;
pub use shell::{Shell, ShellCommand};
