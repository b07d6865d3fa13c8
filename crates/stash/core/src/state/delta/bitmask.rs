use bitflags::bitflags;

bitflags! {
    /// Tracks which parts of a [`crate::PlayerState`] changed during a transfer.
    ///
    /// Presentation layers use this to refresh only the panels that moved.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct PlayerFields: u8 {
        const GOLD            = 1 << 0;
        const INVENTORY       = 1 << 1;
        const STASH           = 1 << 2;
        const EQUIPMENT       = 1 << 3;
        const EQUIPPED_WEAPON = 1 << 4;
        const STATS           = 1 << 5;
    }
}
