//! Content factory for loading duels from a data directory.

use std::path::{Path, PathBuf};

use duel_core::DuelConfig;

use crate::loaders::{ConfigLoader, DuelLoader, LoadResult, RosterLoader};
use crate::roster::{NamedDuel, Roster};

/// Content factory that loads all duel content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional)
/// ├── roster.ron
/// └── duels/
///     ├── opening.ron
///     └── crossing.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load enumeration config from `config.toml`, or the default if absent.
    pub fn load_config(&self) -> LoadResult<DuelConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(DuelConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the fighter roster from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        RosterLoader::load(&self.data_dir.join("roster.ron"))
    }

    /// Load `duels/{duel_name}.ron` and resolve its entrants against `roster`.
    pub fn load_duel(&self, roster: &Roster, duel_name: &str) -> LoadResult<NamedDuel> {
        let path = self.duel_path(duel_name);
        let spec = DuelLoader::load(&path)?;
        roster
            .resolve(&spec)
            .map_err(|e| anyhow::anyhow!("Failed to resolve duel {}: {}", path.display(), e))
    }

    fn duel_path(&self, duel_name: &str) -> PathBuf {
        self.data_dir
            .join("duels")
            .join(format!("{}.ron", duel_name))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
