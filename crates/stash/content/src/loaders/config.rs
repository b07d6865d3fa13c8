//! Engine configuration loader.

use std::path::Path;

use stash_core::EngineConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load engine config from a TOML file.
    ///
    /// Missing keys fall back to [`EngineConfig::default`].
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<EngineConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stash_core::{InvariantPolicy, RequirementRule};

    #[test]
    fn parses_both_fields() {
        let config = ConfigLoader::parse(
            r#"
            requirement_rule = "legacy_precedence"
            invariant_policy = "revert"
            "#,
        )
        .unwrap();

        assert_eq!(config.requirement_rule, RequirementRule::LegacyPrecedence);
        assert_eq!(config.invariant_policy, InvariantPolicy::Revert);
    }

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn unknown_rule_is_an_error() {
        let err = ConfigLoader::parse(r#"requirement_rule = "anything_goes""#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
