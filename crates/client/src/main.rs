//! Duel enumeration binary.
//!
//! Lists every sequence a duel from the data directory can play out.
//!
//! # Examples
//!
//! ```bash
//! # Text table for data/duels/opening.ron
//! cargo run -p duel-client
//!
//! # JSON lines, explicit-stack strategy
//! DUEL_FORMAT=json DUEL_STRATEGY=stack cargo run -p duel-client
//! ```

use std::io::Write;

use anyhow::Result;
use duel_client::{ClientConfig, OutputFormat, logging, report};
use duel_content::ContentFactory;
use duel_core::enumerate_outcomes;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_file.as_deref())?;

    let factory = ContentFactory::new(&config.data_dir);
    let duel_config = config.apply_to(factory.load_config()?);
    let roster = factory.load_roster()?;
    let duel = factory.load_duel(&roster, &config.duel)?;
    let setup = duel.setup(&duel_config)?;

    tracing::info!(
        duel = %config.duel,
        first = duel.name(setup.order().first()),
        strategy = %duel_config.strategy,
        "Enumerating duel"
    );

    let outcomes = enumerate_outcomes(&setup, &duel_config)?;
    tracing::info!(sequences = outcomes.len(), "Enumeration complete");

    let mut stdout = std::io::stdout().lock();
    match config.format {
        OutputFormat::Text => report::write_text(&mut stdout, &duel, &setup, &outcomes)?,
        OutputFormat::Json => report::write_json(&mut stdout, &duel, &outcomes)?,
    }
    stdout.flush()?;

    Ok(())
}
