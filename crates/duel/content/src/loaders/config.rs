//! Enumeration configuration loader.

use std::path::Path;

use duel_core::DuelConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`DuelConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`DuelConfig::default`].
    pub fn load(path: &Path) -> LoadResult<DuelConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> Result<DuelConfig, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::ExploreStrategy;

    #[test]
    fn empty_file_is_default_config() {
        assert_eq!(ConfigLoader::parse("").unwrap(), DuelConfig::default());
    }

    #[test]
    fn parses_every_field() {
        let config = ConfigLoader::parse(
            r#"
            strategy = "stack"
            limit = 10
            max_total_dice = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.strategy, ExploreStrategy::Stack);
        assert_eq!(config.limit, Some(10));
        assert_eq!(config.max_total_dice, 12);
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert!(ConfigLoader::parse(r#"strategy = "breadth""#).is_err());
    }
}
