//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::ItemHandle;

/// Errors that occur when accessing oracle data.
///
/// A missing oracle is fatal. A missing definition means the player state
/// references an item the catalog does not know, which is a data error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// ItemOracle is not available in the environment.
    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    /// StoreOracle is not available in the environment.
    #[error("StoreOracle not available")]
    StoreNotAvailable,

    /// Item definition was not found by handle.
    #[error("item definition {0:?} not found")]
    ItemNotFound(ItemHandle),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            ItemsNotAvailable | StoreNotAvailable => ErrorSeverity::Fatal,
            ItemNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            StoreNotAvailable => "ORACLE_STORE_NOT_AVAILABLE",
            ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
        }
    }
}
