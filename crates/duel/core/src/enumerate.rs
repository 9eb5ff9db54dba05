//! Enumeration of every complete sequence of a duel.
//!
//! [`Enumerator`] drives the replay explorer: each step starts from fresh
//! copies of the starting fighters and the last raw trace as its cursor.
//! Traces that back out of an exhausted prefix (ending in `Invalid`) move the
//! cursor without being yielded; the singleton `[Invalid]` ends iteration.

use crate::config::{DuelConfig, ExploreStrategy};
use crate::explore::{DepthFirst, ExploreError, SequenceExplorer};
use crate::fighter::Fighter;
use crate::sequence::{Outcome, Sequence, Trace};
use crate::setup::{DuelSetup, TurnOrder};

/// Lazy, restartable iterator over the outcomes of a duel.
#[derive(Clone, Debug)]
pub struct Enumerator<'a> {
    explorer: SequenceExplorer<'a>,
    cursor: Option<Sequence>,
    steps: usize,
    finished: bool,
}

impl<'a> Enumerator<'a> {
    pub fn new(setup: &'a DuelSetup) -> Self {
        Self {
            explorer: SequenceExplorer::new(setup),
            cursor: None,
            steps: 0,
            finished: false,
        }
    }

    /// Resumes enumeration after a previously yielded sequence.
    ///
    /// The cursor is validated on the first step.
    pub fn resume_after(setup: &'a DuelSetup, cursor: Sequence) -> Self {
        Self {
            cursor: Some(cursor),
            ..Self::new(setup)
        }
    }

    /// The last raw trace seen, if any.
    pub fn cursor(&self) -> Option<&Sequence> {
        self.cursor.as_ref()
    }

    /// Number of explorer calls made so far, including skipped traces.
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Advances to the next complete outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ExploreError`] if the cursor handed to
    /// [`Enumerator::resume_after`] does not belong to this duel.
    pub fn try_next(&mut self) -> Result<Option<Outcome>, ExploreError> {
        if self.finished {
            return Ok(None);
        }

        loop {
            let trace = match self.explorer.next_after(self.cursor.as_ref()) {
                Ok(trace) => trace,
                Err(err) => {
                    self.finished = true;
                    return Err(err);
                }
            };
            self.steps += 1;

            if trace.sequence.is_exhausted() {
                tracing::debug!(steps = self.steps, "enumeration exhausted");
                self.finished = true;
                return Ok(None);
            }

            self.cursor = Some(trace.sequence.clone());

            if trace.sequence.is_complete() {
                tracing::trace!(step = self.steps, sequence = %trace.sequence, "outcome");
                let order = self.explorer.setup().order();
                return Ok(Some(into_outcome(trace, order)));
            }

            tracing::trace!(step = self.steps, sequence = %trace.sequence, "backing out");
        }
    }
}

impl Iterator for Enumerator<'_> {
    type Item = Outcome;

    fn next(&mut self) -> Option<Outcome> {
        match self.try_next() {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(error = %err, "enumeration stopped");
                None
            }
        }
    }
}

impl core::iter::FusedIterator for Enumerator<'_> {}

fn into_outcome(trace: Trace, order: TurnOrder) -> Outcome {
    Outcome {
        sequence: trace.sequence,
        order,
        first: trace.first,
        second: trace.second,
    }
}

/// Every complete sequence of a duel between `a` and `b`, in enumeration order.
pub fn enumerate_all(a: Fighter, b: Fighter) -> Vec<Sequence> {
    let setup = DuelSetup::new(a, b);
    Enumerator::new(&setup)
        .map(|outcome| outcome.sequence)
        .collect()
}

/// Enumerates the outcomes of `setup` with the strategy and limit in `config`.
///
/// # Errors
///
/// Propagates [`ExploreError`] from the replay strategy. The enumerator only
/// feeds back its own traces, so an error here indicates a bug.
pub fn enumerate_outcomes(
    setup: &DuelSetup,
    config: &DuelConfig,
) -> Result<Vec<Outcome>, ExploreError> {
    let limit = config.limit.unwrap_or(usize::MAX);
    let mut outcomes = Vec::new();

    match config.strategy {
        ExploreStrategy::Replay => {
            let mut enumerator = Enumerator::new(setup);
            while outcomes.len() < limit {
                match enumerator.try_next()? {
                    Some(outcome) => outcomes.push(outcome),
                    None => break,
                }
            }
            tracing::debug!(
                steps = enumerator.steps(),
                outcomes = outcomes.len(),
                "replay enumeration finished"
            );
        }
        ExploreStrategy::Stack => {
            let order = setup.order();
            outcomes.extend(
                DepthFirst::new(setup)
                    .take(limit)
                    .map(|trace| into_outcome(trace, order)),
            );
            tracing::debug!(outcomes = outcomes.len(), "stack enumeration finished");
        }
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action::*;
    use crate::fighter::{DiceRoll, Weapon};
    use crate::setup::Side;

    #[test]
    fn single_hit_against_empty_opponent() {
        let a = Fighter::new(10, 0, Weapon::new(3, 0)).with_roll(DiceRoll::new(1, 0));
        let b = Fighter::new(10, 0, Weapon::new(3, 0));
        let setup = DuelSetup::new(a, b);
        let outcomes: Vec<_> = Enumerator::new(&setup).collect();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(
            outcomes[0].sequence,
            Sequence::from([RegularAttack, EndOfSequence])
        );
        assert_eq!(outcomes[0].health_of(Side::A), 10);
        assert_eq!(outcomes[0].health_of(Side::B), 7);
        assert_eq!(
            outcomes[1].sequence,
            Sequence::from([RegularBlock, EndOfSequence])
        );
        assert_eq!(outcomes[1].health_of(Side::B), 10);
    }

    #[test]
    fn skipped_traces_still_count_as_steps() {
        let a = Fighter::new(8, 1, Weapon::new(3, 4)).with_roll(DiceRoll::new(2, 0));
        let b = Fighter::new(4, 0, Weapon::new(3, 4)).with_roll(DiceRoll::new(1, 0));
        let setup = DuelSetup::new(a, b);
        let mut enumerator = Enumerator::new(&setup);

        let count = enumerator.by_ref().count();
        assert_eq!(count, 5);
        // five outcomes, four backing-out traces, one final [Invalid]
        assert_eq!(enumerator.steps(), 10);
        assert!(enumerator.next().is_none());
    }

    #[test]
    fn resume_continues_after_cursor() {
        let a = Fighter::new(8, 1, Weapon::new(3, 4)).with_roll(DiceRoll::new(2, 0));
        let b = Fighter::new(4, 0, Weapon::new(3, 4)).with_roll(DiceRoll::new(1, 0));
        let setup = DuelSetup::new(a, b);

        let all: Vec<_> = Enumerator::new(&setup).map(|o| o.sequence).collect();
        let rest: Vec<_> = Enumerator::resume_after(&setup, all[1].clone())
            .map(|o| o.sequence)
            .collect();
        assert_eq!(rest, all[2..]);
    }

    #[test]
    fn resume_with_foreign_cursor_errors() {
        let a = Fighter::new(8, 1, Weapon::new(3, 4)).with_roll(DiceRoll::new(2, 0));
        let b = Fighter::new(4, 0, Weapon::new(3, 4));
        let setup = DuelSetup::new(a, b);

        let mut enumerator =
            Enumerator::resume_after(&setup, Sequence::from([CriticalAttack, Pass, EndOfSequence]));
        assert!(matches!(
            enumerator.try_next(),
            Err(ExploreError::Diverged { index: 0, .. })
        ));
        assert_eq!(enumerator.try_next(), Ok(None));
    }

    #[test]
    fn limit_caps_both_strategies() {
        let a = Fighter::new(8, 1, Weapon::new(3, 4)).with_roll(DiceRoll::new(2, 0));
        let b = Fighter::new(4, 0, Weapon::new(3, 4)).with_roll(DiceRoll::new(1, 0));
        let setup = DuelSetup::new(a, b);

        for strategy in [ExploreStrategy::Replay, ExploreStrategy::Stack] {
            let config = DuelConfig::new().with_strategy(strategy).with_limit(3);
            let outcomes = enumerate_outcomes(&setup, &config).unwrap();
            assert_eq!(outcomes.len(), 3, "{strategy}");
        }
    }
}
