//! Explicit-stack depth-first enumeration.

use crate::action::{Action, ActionOrder};
use crate::fighter::Fighter;
use crate::sequence::{Sequence, Trace};
use crate::setup::DuelSetup;

use super::{depth_hint, play, terminal_marker};

/// One non-terminal node on the current path.
#[derive(Clone, Debug)]
struct Frame {
    first: Fighter,
    second: Fighter,
    /// Siblings not tried yet at this depth.
    untried: ActionOrder,
}

impl Frame {
    fn new(first: Fighter, second: Fighter) -> Self {
        Self {
            first,
            second,
            untried: ActionOrder::iter(),
        }
    }
}

/// Iterator over every complete sequence of a duel, in enumeration order.
///
/// `path[i]` is the action that led from `stack[i]` to `stack[i + 1]`.
#[derive(Clone, Debug)]
pub struct DepthFirst {
    stack: Vec<Frame>,
    path: Vec<Action>,
    root_leaf: Option<Trace>,
}

impl DepthFirst {
    pub fn new(setup: &DuelSetup) -> Self {
        let (first, second) = setup.fresh_pair();
        let depth = depth_hint(setup);

        let mut walker = Self {
            stack: Vec::with_capacity(depth),
            path: Vec::with_capacity(depth),
            root_leaf: None,
        };

        match terminal_marker(&first, &second) {
            Some(marker) => {
                walker.root_leaf = Some(Trace {
                    sequence: Sequence::from([marker]),
                    first,
                    second,
                });
            }
            None => walker.stack.push(Frame::new(first, second)),
        }
        walker
    }

    fn leaf(&self, marker: Action, first: Fighter, second: Fighter) -> Trace {
        let sequence = self
            .path
            .iter()
            .copied()
            .chain(core::iter::once(marker))
            .collect();
        Trace {
            sequence,
            first,
            second,
        }
    }
}

impl Iterator for DepthFirst {
    type Item = Trace;

    fn next(&mut self) -> Option<Trace> {
        if let Some(leaf) = self.root_leaf.take() {
            return Some(leaf);
        }

        loop {
            let index = self.stack.len().checked_sub(1)?;
            let frame = self.stack.last_mut()?;
            let actor = if index % 2 == 0 {
                frame.first
            } else {
                frame.second
            };

            let Some(action) = frame.untried.find(|a| actor.is_eligible(*a)) else {
                self.stack.pop();
                self.path.pop();
                continue;
            };

            let (mut first, mut second) = (frame.first, frame.second);
            play(&mut first, &mut second, index, action);
            self.path.push(action);

            let (next_actor, next_other) = if (index + 1) % 2 == 0 {
                (&first, &second)
            } else {
                (&second, &first)
            };

            match terminal_marker(next_actor, next_other) {
                Some(marker) => {
                    let leaf = self.leaf(marker, first, second);
                    self.path.pop();
                    return Some(leaf);
                }
                None => self.stack.push(Frame::new(first, second)),
            }
        }
    }
}

impl core::iter::FusedIterator for DepthFirst {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::{DiceRoll, Weapon};
    use Action::*;

    #[test]
    fn walks_leaves_in_priority_order() {
        let a = Fighter::new(10, 0, Weapon::new(3, 0)).with_roll(DiceRoll::new(1, 0));
        let b = Fighter::new(10, 0, Weapon::new(3, 0));
        let leaves: Vec<_> = DepthFirst::new(&DuelSetup::new(a, b))
            .map(|trace| trace.sequence)
            .collect();

        assert_eq!(
            leaves,
            [
                Sequence::from([RegularAttack, EndOfSequence]),
                Sequence::from([RegularBlock, EndOfSequence]),
            ]
        );
    }

    #[test]
    fn dead_first_mover_yields_single_leaf() {
        let a = Fighter::new(0, 0, Weapon::new(3, 4)).with_roll(DiceRoll::new(2, 1));
        let b = Fighter::new(4, 0, Weapon::new(3, 3)).with_roll(DiceRoll::new(1, 0));
        let mut walker = DepthFirst::new(&DuelSetup::new(a, b));

        let leaf = walker.next().unwrap();
        assert_eq!(leaf.sequence, Sequence::from([Dead]));
        assert_eq!(leaf.first.health, 0);
        assert!(walker.next().is_none());
        assert!(walker.next().is_none());
    }

    #[test]
    fn passing_first_mover_still_explores_opponent() {
        // B moves first with no dice and must pass.
        let a = Fighter::new(3, 0, Weapon::new(3, 4)).with_roll(DiceRoll::new(0, 1));
        let b = Fighter::new(4, 1, Weapon::new(3, 3));
        let leaves: Vec<_> = DepthFirst::new(&DuelSetup::new(a, b)).collect();

        assert_eq!(leaves.len(), 2);
        assert_eq!(leaves[0].sequence, Sequence::from([Pass, CriticalAttack, Dead]));
        assert_eq!(leaves[0].first.health, 0);
        assert_eq!(leaves[0].second.health, 3);
        assert_eq!(leaves[1].sequence, Sequence::from([Pass, CriticalBlock, EndOfSequence]));
        assert_eq!(leaves[1].first.health, 4);
    }
}
