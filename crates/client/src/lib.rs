//! Duel client: configuration, logging and reporting around the enumerator.
//!
//! The binary in `main.rs` is the composition root. It loads content through
//! `duel-content`, enumerates with `duel-core` and renders with [`report`].

pub mod config;
pub mod logging;
pub mod report;

pub use config::{ClientConfig, OutputFormat};
