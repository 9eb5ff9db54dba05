//! Sequence exploration over the duel decision tree.
//!
//! Every node is a turn; its children are the eligible actions of the fighter
//! due to act, visited in [`ActionOrder`](crate::action::ActionOrder). Leaves
//! end in `Dead` or `EndOfSequence`.
//!
//! Two strategies produce the same leaves in the same order:
//!
//! - [`SequenceExplorer`]: keeps no state between calls. Each call rebuilds
//!   the position from the previously emitted trace and advances to the next
//!   leaf.
//! - [`DepthFirst`]: an iterator holding an explicit stack of untried
//!   siblings.

pub mod replay;
pub mod stack;

pub use replay::SequenceExplorer;
pub use stack::DepthFirst;

use crate::action::Action;
use crate::config::DuelConfig;
use crate::error::{DuelError, ErrorSeverity};
use crate::fighter::Fighter;
use crate::setup::DuelSetup;

/// Errors raised when a caller-supplied trace cannot guide exploration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExploreError {
    #[error("trace is empty")]
    EmptyTrace,

    #[error("trace does not end in a control marker (last action: {last})")]
    Unterminated { last: Action },

    #[error("control marker {action} at position {index} before the end of the trace")]
    MarkerBeforeEnd { index: usize, action: Action },

    #[error("trace diverges from this duel at position {index} (recorded {recorded})")]
    Diverged { index: usize, recorded: Action },
}

impl DuelError for ExploreError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyTrace | Self::Unterminated { .. } | Self::MarkerBeforeEnd { .. } => {
                ErrorSeverity::Validation
            }
            Self::Diverged { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyTrace => "EXPLORE_EMPTY_TRACE",
            Self::Unterminated { .. } => "EXPLORE_UNTERMINATED",
            Self::MarkerBeforeEnd { .. } => "EXPLORE_MARKER_BEFORE_END",
            Self::Diverged { .. } => "EXPLORE_DIVERGED",
        }
    }
}

/// Checks that `trace` has exactly one control marker, in its final slot.
pub fn validate_trace(trace: &[Action]) -> Result<(), ExploreError> {
    let (last, body) = trace.split_last().ok_or(ExploreError::EmptyTrace)?;
    if !last.is_marker() {
        return Err(ExploreError::Unterminated { last: *last });
    }
    if let Some((index, action)) = body.iter().enumerate().find(|(_, a)| a.is_marker()) {
        return Err(ExploreError::MarkerBeforeEnd {
            index,
            action: *action,
        });
    }
    Ok(())
}

/// Marker that ends the sequence before `actor` takes its turn, if any.
///
/// A dead fighter cannot act. Otherwise the duel ends once neither side has
/// dice left.
pub(crate) const fn terminal_marker(actor: &Fighter, other: &Fighter) -> Option<Action> {
    if actor.is_dead() {
        Some(Action::Dead)
    } else if actor.remaining_actions() + other.remaining_actions() == 0 {
        Some(Action::EndOfSequence)
    } else {
        None
    }
}

/// Capacity hint for a sequence or stack of `setup`: one slot per die plus the
/// terminal marker, capped so unchecked setups cannot request huge buffers.
pub(crate) fn depth_hint(setup: &DuelSetup) -> usize {
    let depth = setup
        .total_dice()
        .min(u64::from(DuelConfig::DEFAULT_MAX_TOTAL_DICE));
    depth as usize + 1
}

/// Splits the turn-ordered pair into (acting, receiving) for position `index`.
pub(crate) fn movers<'f>(
    first: &'f mut Fighter,
    second: &'f mut Fighter,
    index: usize,
) -> (&'f mut Fighter, &'f mut Fighter) {
    if index % 2 == 0 {
        (first, second)
    } else {
        (second, first)
    }
}

/// Plays `action` for the fighter acting at `index`: it pays the die, the
/// other fighter takes the effect.
pub(crate) fn play(first: &mut Fighter, second: &mut Fighter, index: usize, action: Action) {
    let (actor, target) = movers(first, second, index);
    actor.spend_die(action);
    target.receive_action(action, actor);
}
