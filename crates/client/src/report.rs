//! Human- and machine-readable rendering of duel outcomes.
//!
//! Text output follows a fixed layout, one line per fighter in turn order:
//! each cell holds the fighter's glyph for the slots it acted in and is empty
//! for the other fighter's slots, cells are tab-separated, and the line ends
//! with the final health.

use std::io::{self, Write};

use duel_content::NamedDuel;
use duel_core::{Action, DuelSetup, Fighter, Outcome, Sequence};

const RULE: &str = "------------------------------";

/// Display glyph for an action or marker.
pub const fn glyph(action: Action) -> &'static str {
    match action {
        Action::RegularAttack => "🗡️",
        Action::RegularBlock => "🛡️",
        Action::CriticalAttack => "🔥🗡️",
        Action::CriticalBlock => "🔥🛡️",
        Action::Pass => "🫥",
        Action::Dead => "💀",
        Action::EndOfSequence => "✅",
        Action::Invalid => "⛔",
    }
}

/// One-line stat block: health, initiative, weapon, dice.
pub fn fighter_summary(fighter: &Fighter) -> String {
    format!(
        "❤️ {} | ⚡ {} | 🗡️ {} 🔥 {} | 🎲 🗡️ {} 🔥 {}",
        fighter.health,
        fighter.initiative,
        fighter.weapon.normal,
        fighter.weapon.critical,
        fighter.roll.hits,
        fighter.roll.crits,
    )
}

/// Formats one fighter's row of a sequence.
///
/// `slot` is 0 for the first mover and 1 for the second.
fn format_row(sequence: &Sequence, slot: usize, health: u32) -> String {
    let mut cells: Vec<&str> = sequence
        .iter()
        .enumerate()
        .map(|(i, action)| if i % 2 == slot { glyph(*action) } else { "" })
        .collect();
    let readout = format!("❤️ {}", health);
    cells.push(&readout);
    cells.join("\t")
}

/// Formats an outcome as two tab-aligned lines, first mover on top.
pub fn format_outcome(outcome: &Outcome) -> String {
    let first = format_row(&outcome.sequence, 0, outcome.first.health);
    let second = format_row(&outcome.sequence, 1, outcome.second.health);
    format!("{}\n{}", first, second)
}

/// Writes the duel header followed by every outcome in text form.
pub fn write_text(
    out: &mut impl Write,
    duel: &NamedDuel,
    setup: &DuelSetup,
    outcomes: &[Outcome],
) -> io::Result<()> {
    let order = setup.order();
    for side in [order.first(), order.second()] {
        writeln!(
            out,
            "{}: {}",
            duel.name(side),
            fighter_summary(setup.fighter(side))
        )?;
    }
    writeln!(out, "{}", RULE)?;

    for outcome in outcomes {
        writeln!(out, "{}", format_outcome(outcome))?;
        writeln!(out, "{}", RULE)?;
    }

    writeln!(out, "{} sequences", outcomes.len())
}

#[derive(Debug, serde::Serialize)]
struct FighterRecord<'a> {
    name: &'a str,
    health: u32,
}

#[derive(Debug, serde::Serialize)]
struct OutcomeRecord<'a> {
    index: usize,
    actions: &'a Sequence,
    /// Final state in turn order.
    fighters: [FighterRecord<'a>; 2],
}

/// Writes one JSON object per outcome.
pub fn write_json(out: &mut impl Write, duel: &NamedDuel, outcomes: &[Outcome]) -> io::Result<()> {
    for (index, outcome) in outcomes.iter().enumerate() {
        let order = outcome.order;
        let record = OutcomeRecord {
            index,
            actions: &outcome.sequence,
            fighters: [order.first(), order.second()].map(|side| FighterRecord {
                name: duel.name(side),
                health: outcome.health_of(side),
            }),
        };
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_content::NamedFighter;
    use duel_core::{DiceRoll, Enumerator, Weapon};

    fn opening() -> (NamedDuel, DuelSetup) {
        let duel = NamedDuel {
            a: NamedFighter {
                name: "knight".into(),
                fighter: Fighter::new(8, 1, Weapon::new(3, 4)).with_roll(DiceRoll::new(2, 0)),
            },
            b: NamedFighter {
                name: "squire".into(),
                fighter: Fighter::new(4, 0, Weapon::new(3, 4)).with_roll(DiceRoll::new(1, 0)),
            },
        };
        let setup = DuelSetup::new(duel.a.fighter, duel.b.fighter);
        (duel, setup)
    }

    #[test]
    fn rows_leave_the_other_fighters_slots_empty() {
        let (_, setup) = opening();
        let outcome = Enumerator::new(&setup).next().unwrap();

        let text = format_outcome(&outcome);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "🗡️\t\t🗡️\t\t❤️ 5");
        assert_eq!(lines[1], "\t🗡️\t\t💀\t❤️ 0");
    }

    #[test]
    fn rows_have_one_cell_per_slot_plus_health() {
        let (_, setup) = opening();
        for outcome in Enumerator::new(&setup) {
            let text = format_outcome(&outcome);
            for line in text.lines() {
                assert_eq!(line.split('\t').count(), outcome.sequence.len() + 1);
            }
        }
    }

    #[test]
    fn summary_lists_stats_and_dice() {
        let (duel, _) = opening();
        assert_eq!(
            fighter_summary(&duel.a.fighter),
            "❤️ 8 | ⚡ 1 | 🗡️ 3 🔥 4 | 🎲 🗡️ 2 🔥 0"
        );
    }

    #[test]
    fn text_report_has_header_and_count() {
        let (duel, setup) = opening();
        let outcomes: Vec<_> = Enumerator::new(&setup).collect();

        let mut buf = Vec::new();
        write_text(&mut buf, &duel, &setup, &outcomes).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("knight: ❤️ 8"));
        assert!(text.trim_end().ends_with("5 sequences"));
        assert_eq!(text.matches(RULE).count(), outcomes.len() + 1);
    }

    #[test]
    fn json_report_uses_action_names() {
        let (duel, setup) = opening();
        let outcomes: Vec<_> = Enumerator::new(&setup).take(1).collect();

        let mut buf = Vec::new();
        write_json(&mut buf, &duel, &outcomes).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["index"], 0);
        assert_eq!(
            value["actions"],
            serde_json::json!(["regular_attack", "regular_attack", "regular_attack", "dead"])
        );
        assert_eq!(value["fighters"][0]["name"], "knight");
        assert_eq!(value["fighters"][0]["health"], 5);
        assert_eq!(value["fighters"][1]["name"], "squire");
        assert_eq!(value["fighters"][1]["health"], 0);
    }
}
