//! Replay-guided enumeration step.
//!
//! The explorer holds no cursor of its own. Given the last trace it emitted,
//! it replays that trace from the starting fighters and decides at each depth
//! whether to:
//!
//! - **replay** the recorded action, when the recorded trace continues past
//!   the next position (the change happens deeper down);
//! - **advance** to the next eligible sibling after the recorded action, when
//!   the recorded trace ends right after this position;
//! - **descend fresh**, taking the first eligible action, once the new trace
//!   has left the recorded one.
//!
//! A depth that must advance but has no sibling left ends the trace with
//! `Invalid`. Fed back in, that trace makes the parent depth advance, so
//! exhaustion climbs one level per call until the root yields `[Invalid]`.

use crate::action::{Action, ActionOrder};
use crate::sequence::{Sequence, Trace};
use crate::setup::DuelSetup;

use super::{ExploreError, depth_hint, movers, play, terminal_marker, validate_trace};

/// Produces the next trace of a duel after a previously produced one.
#[derive(Clone, Copy, Debug)]
pub struct SequenceExplorer<'a> {
    setup: &'a DuelSetup,
}

impl<'a> SequenceExplorer<'a> {
    pub const fn new(setup: &'a DuelSetup) -> Self {
        Self { setup }
    }

    pub const fn setup(&self) -> &'a DuelSetup {
        self.setup
    }

    /// Builds the trace that follows `previous` in enumeration order.
    ///
    /// `None` yields the leftmost leaf. The result ends in `Dead` or
    /// `EndOfSequence` for a complete sequence, in `Invalid` when the walk
    /// backed out of an exhausted prefix, and is exactly `[Invalid]` once
    /// nothing remains.
    ///
    /// # Errors
    ///
    /// Returns [`ExploreError`] if `previous` is malformed or was not produced
    /// from this setup.
    pub fn next_after(&self, previous: Option<&Sequence>) -> Result<Trace, ExploreError> {
        let (mut first, mut second) = self.setup.fresh_pair();

        let mut guide = match previous {
            Some(prev) => {
                validate_trace(prev)?;
                if prev.is_exhausted() {
                    return Ok(Trace {
                        sequence: Sequence::exhausted(),
                        first,
                        second,
                    });
                }
                Some(prev)
            }
            None => None,
        };

        let mut current = Sequence::with_capacity(depth_hint(self.setup));

        loop {
            let index = current.len();
            let (actor, target) = movers(&mut first, &mut second, index);

            if let Some(marker) = terminal_marker(actor, target) {
                match guide {
                    None => current.push(marker),
                    // Replay only reaches a terminal state at the leaf it
                    // emitted last time.
                    Some(prev) if prev[index] == marker => current.push(Action::Invalid),
                    Some(prev) => {
                        return Err(ExploreError::Diverged {
                            index,
                            recorded: prev[index],
                        });
                    }
                }
                break;
            }

            let choice = match guide {
                None => ActionOrder::iter().find(|a| actor.is_eligible(*a)),
                Some(prev) => {
                    let recorded = prev[index];
                    if recorded.is_marker() {
                        return Err(ExploreError::Diverged { index, recorded });
                    }
                    // validated: a non-marker is always followed by another entry
                    let following = prev[index + 1];

                    if following.is_marker() {
                        guide = None;
                        let next = ActionOrder::after(recorded).find(|a| actor.is_eligible(*a));
                        tracing::trace!(index, %recorded, next = ?next, "advancing sibling");
                        next
                    } else if actor.is_eligible(recorded) {
                        Some(recorded)
                    } else {
                        return Err(ExploreError::Diverged { index, recorded });
                    }
                }
            };

            let Some(action) = choice else {
                tracing::trace!(index, "prefix exhausted");
                current.push(Action::Invalid);
                break;
            };

            current.push(action);
            play(&mut first, &mut second, index, action);
        }

        Ok(Trace {
            sequence: current,
            first,
            second,
        })
    }
}
