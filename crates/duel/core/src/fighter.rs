//! Per-duel fighter state: health, initiative, weapon and remaining dice.
//!
//! A [`Fighter`] is a plain `Copy` value. The enumerator keeps the starting
//! fighters untouched and explores every branch on disposable copies.

use crate::action::Action;
use crate::combat::{apply_damage, attack_damage};

/// Damage profile of a fighter's weapon. Immutable for the whole duel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    /// Damage dealt by a regular attack.
    pub normal: u32,
    /// Damage dealt by a critical attack.
    pub critical: u32,
}

impl Weapon {
    pub const fn new(normal: u32, critical: u32) -> Self {
        Self { normal, critical }
    }
}

/// Pre-rolled dice a fighter may still spend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceRoll {
    pub hits: u32,
    pub crits: u32,
}

impl DiceRoll {
    pub const fn new(hits: u32, crits: u32) -> Self {
        Self { hits, crits }
    }

    /// Combined dice, widened so that `u32::MAX` pools cannot wrap.
    pub const fn total(&self) -> u64 {
        self.hits as u64 + self.crits as u64
    }

    pub const fn is_empty(&self) -> bool {
        self.hits == 0 && self.crits == 0
    }
}

/// One combatant.
///
/// # Invariants
///
/// - `health` never increases while a sequence is explored
/// - `roll.hits` and `roll.crits` never underflow; every decrement is guarded
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub health: u32,
    /// Turn-order key. Strictly higher initiative moves first.
    pub initiative: u32,
    pub weapon: Weapon,
    pub roll: DiceRoll,
}

impl Fighter {
    /// Creates a fighter with no dice rolled yet.
    pub const fn new(health: u32, initiative: u32, weapon: Weapon) -> Self {
        Self {
            health,
            initiative,
            weapon,
            roll: DiceRoll::new(0, 0),
        }
    }

    /// Attaches a pre-rolled set of dice (builder pattern).
    #[must_use]
    pub const fn with_roll(mut self, roll: DiceRoll) -> Self {
        self.roll = roll;
        self
    }

    pub const fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Total number of actions this fighter can still actively take.
    pub const fn remaining_actions(&self) -> u64 {
        self.roll.total()
    }

    /// Checks whether the current dice allow this fighter to take `action`.
    ///
    /// `Pass` is only legal once both dice pools are empty. Control markers are
    /// always eligible since no fighter ever picks them.
    pub const fn is_eligible(&self, action: Action) -> bool {
        match action {
            Action::RegularAttack | Action::RegularBlock => self.roll.hits > 0,
            Action::CriticalAttack | Action::CriticalBlock => self.roll.crits > 0,
            Action::Pass => self.roll.is_empty(),
            Action::Dead | Action::EndOfSequence | Action::Invalid => true,
        }
    }

    /// Updates this fighter as the target of `action` taken by `attacker`.
    ///
    /// Attacks cost health. Blocks consume one of this fighter's own dice; a
    /// critical block falls back to a hit die once the crit pool is empty.
    pub fn receive_action(&mut self, action: Action, attacker: &Fighter) {
        if let Some(damage) = attack_damage(&attacker.weapon, action) {
            self.health = apply_damage(self.health, damage);
            return;
        }

        match action {
            Action::RegularBlock => {
                if self.roll.hits > 0 {
                    self.roll.hits -= 1;
                }
            }
            Action::CriticalBlock => {
                if self.roll.crits > 0 {
                    self.roll.crits -= 1;
                } else if self.roll.hits > 0 {
                    self.roll.hits -= 1;
                }
            }
            _ => {}
        }
    }

    /// Spends the die paid by this fighter to perform `action`.
    pub fn spend_die(&mut self, action: Action) {
        if action.uses_hit() {
            self.roll.hits = self.roll.hits.saturating_sub(1);
        } else if action.uses_crit() {
            self.roll.crits = self.roll.crits.saturating_sub(1);
        }
    }
}
