//! Exhaustive enumeration of two-fighter dice duels.
//!
//! `duel-core` defines the duel rules (action order, fighter state
//! transitions, turn order) and the enumeration engine that lists every
//! legal sequence of alternating actions for a pair of pre-rolled fighters.
//! Everything here is pure and deterministic: no I/O, no randomness.
//!
//! Entry points are [`Enumerator`] (lazy, resumable) and
//! [`enumerate_outcomes`] (strategy and limit taken from [`DuelConfig`]).
pub mod action;
pub mod combat;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod explore;
pub mod fighter;
pub mod sequence;
pub mod setup;

pub use action::{Action, ActionOrder};
pub use config::{DuelConfig, ExploreStrategy};
pub use enumerate::{Enumerator, enumerate_all, enumerate_outcomes};
pub use error::{DuelError, ErrorSeverity};
pub use explore::{DepthFirst, ExploreError, SequenceExplorer, validate_trace};
pub use fighter::{DiceRoll, Fighter, Weapon};
pub use sequence::{Outcome, Sequence, Trace};
pub use setup::{DuelSetup, SetupError, Side, TurnOrder};
