//! Action enumeration and the fixed priority order fighters try them in.

/// A single entry in a duel sequence.
///
/// Player actions are the five choices a fighter may make on its turn. Control
/// markers are never chosen by a fighter; they only terminate a sequence.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Action {
    // ========================================================================
    // Player actions (in priority order)
    // ========================================================================
    /// Spend a hit die to deal the weapon's normal damage.
    RegularAttack,

    /// Spend a hit die to parry.
    RegularBlock,

    /// Spend a crit die to deal the weapon's critical damage.
    CriticalAttack,

    /// Spend a crit die to parry.
    CriticalBlock,

    /// Do nothing. Only legal once the fighter has no dice left.
    Pass,

    // ========================================================================
    // Control markers
    // ========================================================================
    /// The fighter due to act has no health left.
    Dead,

    /// Neither fighter has any dice left.
    EndOfSequence,

    /// No unexplored sequence remains with this prefix.
    Invalid,
}

impl Action {
    /// Player actions in the order they are tried on a turn.
    pub const PLAYER_ACTIONS: [Action; 5] = [
        Action::RegularAttack,
        Action::RegularBlock,
        Action::CriticalAttack,
        Action::CriticalBlock,
        Action::Pass,
    ];

    /// Returns the action tried after this one.
    ///
    /// `Pass` and every control marker map to `Invalid`, which ends the chain.
    pub const fn successor(self) -> Action {
        match self {
            Action::RegularAttack => Action::RegularBlock,
            Action::RegularBlock => Action::CriticalAttack,
            Action::CriticalAttack => Action::CriticalBlock,
            Action::CriticalBlock => Action::Pass,
            Action::Pass | Action::Dead | Action::EndOfSequence | Action::Invalid => {
                Action::Invalid
            }
        }
    }

    /// Returns true for `Dead`, `EndOfSequence` and `Invalid`.
    pub const fn is_marker(self) -> bool {
        matches!(self, Action::Dead | Action::EndOfSequence | Action::Invalid)
    }

    pub const fn is_player_action(self) -> bool {
        !self.is_marker()
    }

    /// Returns true for actions that consume a hit die.
    pub const fn uses_hit(self) -> bool {
        matches!(self, Action::RegularAttack | Action::RegularBlock)
    }

    /// Returns true for actions that consume a crit die.
    pub const fn uses_crit(self) -> bool {
        matches!(self, Action::CriticalAttack | Action::CriticalBlock)
    }
}

/// Iterator over the fixed priority chain of player actions.
///
/// `RegularAttack → RegularBlock → CriticalAttack → CriticalBlock → Pass`
#[derive(Clone, Debug)]
pub struct ActionOrder {
    next: Action,
}

impl ActionOrder {
    /// The action a fighter tries first on an unconstrained turn.
    pub const fn first() -> Action {
        Action::RegularAttack
    }

    /// Iterates the full order, starting from [`ActionOrder::first`].
    pub const fn iter() -> Self {
        Self {
            next: Self::first(),
        }
    }

    /// Iterates the actions strictly after `action`.
    ///
    /// Used when backtracking: the siblings left to try at a given depth.
    pub const fn after(action: Action) -> Self {
        Self {
            next: action.successor(),
        }
    }
}

impl Iterator for ActionOrder {
    type Item = Action;

    fn next(&mut self) -> Option<Action> {
        if self.next == Action::Invalid {
            return None;
        }
        let current = self.next;
        self.next = current.successor();
        Some(current)
    }
}
