//! Duel definition loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::roster::DuelSpec;

/// Loader for a single duel from a RON file.
pub struct DuelLoader;

impl DuelLoader {
    /// Load a duel from a RON file.
    ///
    /// RON format: `DuelSpec`
    ///
    /// ```ron
    /// (
    ///     entrants: (
    ///         (fighter: "knight", roll: (hits: 2, crits: 0)),
    ///         (fighter: "squire", roll: (hits: 1, crits: 0)),
    ///     ),
    /// )
    /// ```
    pub fn load(path: &Path) -> LoadResult<DuelSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load duel {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<DuelSpec> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse duel RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::DiceRoll;

    #[test]
    fn parses_both_entrants() {
        let spec = DuelLoader::parse(
            r#"(
                entrants: (
                    (fighter: "knight", roll: (hits: 2, crits: 0)),
                    (fighter: "squire", roll: (hits: 1, crits: 1)),
                ),
            )"#,
        )
        .unwrap();
        assert_eq!(spec.entrants.0.fighter, "knight");
        assert_eq!(spec.entrants.1.roll, DiceRoll::new(1, 1));
    }

    #[test]
    fn a_third_entrant_is_rejected() {
        let result = DuelLoader::parse(
            r#"(
                entrants: (
                    (fighter: "a", roll: (hits: 1, crits: 0)),
                    (fighter: "b", roll: (hits: 1, crits: 0)),
                    (fighter: "c", roll: (hits: 1, crits: 0)),
                ),
            )"#,
        );
        assert!(result.is_err());
    }
}
