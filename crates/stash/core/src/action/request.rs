use crate::slot::{SlotError, SlotId, WeaponSlot};

/// A single drag from `source` to `target`, produced by the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransferRequest {
    pub source: SlotId,
    pub target: SlotId,
}

impl TransferRequest {
    pub fn new(source: SlotId, target: SlotId) -> Self {
        Self { source, target }
    }

    /// Builds a request from textual slot identities.
    pub fn parse(source: &str, target: &str) -> Result<Self, SlotError> {
        Ok(Self::new(source.parse()?, target.parse()?))
    }
}

/// Everything the engine accepts from the outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Drag-resolved transfer between two slots.
    Transfer(TransferRequest),
    /// Choose which weapon slot is in hand.
    SelectWeapon(WeaponSlot),
}

impl From<TransferRequest> for Command {
    fn from(request: TransferRequest) -> Self {
        Command::Transfer(request)
    }
}
