//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use duel_core::{DuelConfig, ExploreStrategy};

/// How outcomes are written to stdout.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Tab-aligned glyph table, two lines per outcome.
    #[default]
    Text,
    /// One JSON object per outcome.
    Json,
}

/// Configuration required to run the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    pub duel: String,
    pub format: OutputFormat,
    /// Overrides `strategy` from `config.toml` when set.
    pub strategy: Option<ExploreStrategy>,
    /// Overrides `limit` from `config.toml` when set.
    pub limit: Option<usize>,
    /// Log to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            duel: "opening".to_string(),
            format: OutputFormat::Text,
            strategy: None,
            limit: None,
            log_file: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `DUEL_DATA_DIR` / `DUEL_NAME`
    /// - `DUEL_FORMAT` (`text` | `json`)
    /// - `DUEL_STRATEGY` (`replay` | `stack`)
    /// - `DUEL_LIMIT`
    /// - `DUEL_LOG_FILE`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] over an arbitrary key lookup.
    /// Unparseable values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(dir) = read("DUEL_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(duel) = read("DUEL_NAME") {
            config.duel = duel;
        }

        if let Some(format) = read("DUEL_FORMAT").and_then(|v| v.trim().parse().ok()) {
            config.format = format;
        }

        config.strategy = read("DUEL_STRATEGY").and_then(|v| v.trim().parse().ok());
        config.limit = read("DUEL_LIMIT").and_then(|v| v.trim().parse().ok());
        config.log_file = read("DUEL_LOG_FILE").map(PathBuf::from);

        config
    }

    /// Applies the environment overrides on top of the file configuration.
    pub fn apply_to(&self, mut duel: DuelConfig) -> DuelConfig {
        if let Some(strategy) = self.strategy {
            duel.strategy = strategy;
        }
        if let Some(limit) = self.limit {
            duel.limit = Some(limit);
        }
        duel
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(ClientConfig::from_lookup(|_| None), ClientConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("DUEL_DATA_DIR", "/srv/duels"),
            ("DUEL_NAME", "crossing"),
            ("DUEL_FORMAT", "JSON"),
            ("DUEL_STRATEGY", "stack"),
            ("DUEL_LIMIT", "7"),
            ("DUEL_LOG_FILE", "/tmp/duel.log"),
        ]));

        assert_eq!(config.data_dir, PathBuf::from("/srv/duels"));
        assert_eq!(config.duel, "crossing");
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.strategy, Some(ExploreStrategy::Stack));
        assert_eq!(config.limit, Some(7));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/duel.log")));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("DUEL_FORMAT", "yaml"),
            ("DUEL_LIMIT", "-3"),
            ("DUEL_NAME", "  "),
        ]));
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.limit, None);
        assert_eq!(config.duel, "opening");
    }

    #[test]
    fn overrides_replace_file_values() {
        let file = DuelConfig::new().with_limit(100);
        let config = ClientConfig {
            strategy: Some(ExploreStrategy::Stack),
            ..ClientConfig::default()
        };
        let merged = config.apply_to(file);
        assert_eq!(merged.strategy, ExploreStrategy::Stack);
        assert_eq!(merged.limit, Some(100));
    }
}
