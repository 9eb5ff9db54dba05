//! Enumeration settings and strategy selection.

/// How the enumerator walks the decision tree.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ExploreStrategy {
    /// Rebuild the next leaf from the previously emitted one.
    #[default]
    Replay,
    /// Explicit depth-first stack of untried siblings.
    Stack,
}

/// Enumeration settings and limits.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DuelConfig {
    pub strategy: ExploreStrategy,

    /// Stop after this many sequences. `None` enumerates everything.
    pub limit: Option<usize>,

    /// Upper bound on the combined dice of both fighters.
    /// Sequence depth and the number of leaves grow with this value.
    pub max_total_dice: u32,
}

impl DuelConfig {
    pub const DEFAULT_MAX_TOTAL_DICE: u32 = 24;

    pub const fn new() -> Self {
        Self {
            strategy: ExploreStrategy::Replay,
            limit: None,
            max_total_dice: Self::DEFAULT_MAX_TOTAL_DICE,
        }
    }

    #[must_use]
    pub const fn with_strategy(mut self, strategy: ExploreStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn with_max_total_dice(mut self, max_total_dice: u32) -> Self {
        self.max_total_dice = max_total_dice;
        self
    }
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self::new()
    }
}
