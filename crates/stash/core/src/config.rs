/// Interpretation of an item's level and attribute requirements.
///
/// Items list a required level and a threshold for each of strength,
/// dexterity and intelligence. The two rules differ only in how the level
/// check combines with the attribute checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RequirementRule {
    /// Level must be met, and at least one attribute threshold must be met.
    #[default]
    LevelAndAnyAttribute,

    /// `(level && strength) || dexterity || intelligence`.
    ///
    /// A sufficient dexterity or intelligence bypasses the level check.
    LegacyPrecedence,
}

/// What the engine does when a post-condition check fails after apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum InvariantPolicy {
    /// Panic immediately. Violations are resolver bugs.
    FailFast,

    /// Discard the staged state, log, and return the violation as an error.
    Revert,
}

impl Default for InvariantPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::FailFast
        } else {
            Self::Revert
        }
    }
}

/// Engine configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// How item requirements are evaluated on equip.
    pub requirement_rule: RequirementRule,

    /// Behaviour on post-condition failure.
    pub invariant_policy: InvariantPolicy,
}

impl EngineConfig {
    // ===== compile-time constants used as type parameters =====
    pub const INVENTORY_CAPACITY: usize = 15;
    pub const WEAPON_SLOTS: usize = 3;
    pub const ARMOR_SLOTS: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_requirement_rule(mut self, requirement_rule: RequirementRule) -> Self {
        self.requirement_rule = requirement_rule;
        self
    }

    pub fn with_invariant_policy(mut self, invariant_policy: InvariantPolicy) -> Self {
        self.invariant_policy = invariant_policy;
        self
    }
}
