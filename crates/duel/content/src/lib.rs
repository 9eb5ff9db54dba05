//! Data-driven duel content and loaders.
//!
//! This crate houses the fighter roster and duel definitions and provides
//! loaders for the RON/TOML files they are stored in:
//! - Fighter roster (`roster.ron`)
//! - Duels with pre-rolled dice (`duels/<name>.ron`)
//! - Enumeration configuration (`config.toml`)
//!
//! All loaders deserialize duel-core types directly with serde.

pub mod roster;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use roster::{DuelSpec, Entrant, FighterTemplate, NamedDuel, NamedFighter, Roster, RosterError};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, DuelLoader, RosterLoader};
