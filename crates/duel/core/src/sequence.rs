//! Sequences of actions and the outcomes they lead to.

use core::ops::Deref;

use crate::action::Action;
use crate::fighter::Fighter;
use crate::setup::{Side, TurnOrder};

/// Alternating trace of actions, first mover at even indices.
///
/// A well-formed sequence ends in exactly one control marker.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sequence(Vec<Action>);

impl Sequence {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Pre-allocates room for `dice` player actions plus the marker.
    pub fn with_capacity(dice: usize) -> Self {
        Self(Vec::with_capacity(dice + 1))
    }

    /// The singleton sequence signalling that nothing is left to enumerate.
    pub fn exhausted() -> Self {
        Self(vec![Action::Invalid])
    }

    pub fn push(&mut self, action: Action) {
        self.0.push(action);
    }

    pub fn terminal(&self) -> Option<Action> {
        self.0.last().copied()
    }

    /// Returns true for the singleton `[Invalid]`.
    pub fn is_exhausted(&self) -> bool {
        self.0.as_slice() == [Action::Invalid]
    }

    /// Returns true if the sequence ends in `Dead` or `EndOfSequence`.
    pub fn is_complete(&self) -> bool {
        matches!(
            self.terminal(),
            Some(Action::Dead | Action::EndOfSequence)
        )
    }

    /// Player actions taken at the positions of one turn slot
    /// (`0` for the first mover, `1` for the second).
    pub fn actions_of(&self, slot: usize) -> impl Iterator<Item = Action> + '_ {
        self.0
            .iter()
            .copied()
            .skip(slot)
            .step_by(2)
            .filter(|action| action.is_player_action())
    }

    pub fn into_inner(self) -> Vec<Action> {
        self.0
    }
}

impl Deref for Sequence {
    type Target = [Action];

    fn deref(&self) -> &[Action] {
        &self.0
    }
}

impl From<Vec<Action>> for Sequence {
    fn from(actions: Vec<Action>) -> Self {
        Self(actions)
    }
}

impl<const N: usize> From<[Action; N]> for Sequence {
    fn from(actions: [Action; N]) -> Self {
        Self(actions.to_vec())
    }
}

impl FromIterator<Action> for Sequence {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl core::fmt::Display for Sequence {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        for (i, action) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{action}")?;
        }
        write!(f, "]")
    }
}

/// A raw explorer result: the trace plus both fighters after playing it.
///
/// The trace may end in `Invalid` when a prefix ran out of siblings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    pub sequence: Sequence,
    /// Fighter who moves first, after the trace.
    pub first: Fighter,
    /// Fighter who moves second, after the trace.
    pub second: Fighter,
}

/// A complete sequence and the final state of both fighters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    pub sequence: Sequence,
    pub order: TurnOrder,
    pub first: Fighter,
    pub second: Fighter,
}

impl Outcome {
    pub fn fighter(&self, side: Side) -> &Fighter {
        if side == self.order.first() {
            &self.first
        } else {
            &self.second
        }
    }

    pub fn health_of(&self, side: Side) -> u32 {
        self.fighter(side).health
    }
}
