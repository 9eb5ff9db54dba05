//! Fighter roster loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::roster::{FighterTemplate, Roster};

/// Loader for the fighter roster from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load the roster from a RON file.
    ///
    /// RON format: `Vec<FighterTemplate>`
    ///
    /// ```ron
    /// [
    ///     (name: "knight", health: 8, initiative: 1, weapon: (normal: 3, critical: 4)),
    /// ]
    /// ```
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        let roster = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load roster {}: {}", path.display(), e))?;
        tracing::debug!(fighters = roster.len(), path = %path.display(), "roster loaded");
        Ok(roster)
    }

    pub fn parse(content: &str) -> LoadResult<Roster> {
        let templates: Vec<FighterTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;
        Ok(Roster::from_templates(templates)?)
    }
}
