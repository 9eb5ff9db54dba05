//! Duel setup: the two starting fighters and the fixed turn order.

use crate::config::DuelConfig;
use crate::error::{DuelError, ErrorSeverity};
use crate::fighter::Fighter;

/// Identifies one of the two fighters by the position it was given to
/// [`DuelSetup::new`], independent of who moves first.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Which side acts on even sequence positions. Decided once per duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOrder {
    first: Side,
}

impl TurnOrder {
    /// `B` moves first only with strictly greater initiative; ties go to `A`.
    pub const fn from_initiative(a: &Fighter, b: &Fighter) -> Self {
        let first = if b.initiative > a.initiative {
            Side::B
        } else {
            Side::A
        };
        Self { first }
    }

    pub const fn first(&self) -> Side {
        self.first
    }

    pub const fn second(&self) -> Side {
        self.first.other()
    }

    /// Side that acts at `index` in a sequence.
    pub const fn side_at(&self, index: usize) -> Side {
        if index % 2 == 0 {
            self.first()
        } else {
            self.second()
        }
    }
}

/// Errors raised while validating a duel setup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("combined dice budget {total} exceeds the configured maximum of {max}")]
    DiceBudgetExceeded { total: u64, max: u32 },
}

impl DuelError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DiceBudgetExceeded { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DiceBudgetExceeded { .. } => "SETUP_DICE_BUDGET_EXCEEDED",
        }
    }
}

/// The two authoritative starting fighters.
///
/// Never mutated by exploration; every step works on the copies returned by
/// [`DuelSetup::fresh_pair`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelSetup {
    a: Fighter,
    b: Fighter,
    order: TurnOrder,
}

impl DuelSetup {
    pub const fn new(a: Fighter, b: Fighter) -> Self {
        let order = TurnOrder::from_initiative(&a, &b);
        Self { a, b, order }
    }

    /// Like [`DuelSetup::new`], rejecting dice budgets over `config.max_total_dice`.
    pub fn checked(a: Fighter, b: Fighter, config: &DuelConfig) -> Result<Self, SetupError> {
        let setup = Self::new(a, b);
        let total = setup.total_dice();
        if total > u64::from(config.max_total_dice) {
            return Err(SetupError::DiceBudgetExceeded {
                total,
                max: config.max_total_dice,
            });
        }
        Ok(setup)
    }

    pub const fn order(&self) -> TurnOrder {
        self.order
    }

    pub const fn fighter(&self, side: Side) -> &Fighter {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    /// Starting state of the fighter who moves first.
    pub const fn first(&self) -> &Fighter {
        self.fighter(self.order.first())
    }

    /// Starting state of the fighter who moves second.
    pub const fn second(&self) -> &Fighter {
        self.fighter(self.order.second())
    }

    pub const fn mover_at(&self, index: usize) -> Side {
        self.order.side_at(index)
    }

    /// Fresh copies of both fighters, in turn order.
    pub const fn fresh_pair(&self) -> (Fighter, Fighter) {
        (*self.first(), *self.second())
    }

    /// Combined dice of both fighters. Cannot wrap: at most `4 * u32::MAX`.
    pub const fn total_dice(&self) -> u64 {
        self.a.remaining_actions() + self.b.remaining_actions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::{DiceRoll, Weapon};

    fn fighter(initiative: u32) -> Fighter {
        Fighter::new(10, initiative, Weapon::new(3, 4))
    }

    #[test]
    fn higher_initiative_moves_first() {
        let setup = DuelSetup::new(fighter(0), fighter(2));
        assert_eq!(setup.order().first(), Side::B);
        assert_eq!(setup.mover_at(0), Side::B);
        assert_eq!(setup.mover_at(1), Side::A);
        assert_eq!(setup.first().initiative, 2);
    }

    #[test]
    fn ties_go_to_the_first_named_fighter() {
        let setup = DuelSetup::new(fighter(3), fighter(3));
        assert_eq!(setup.order().first(), Side::A);
        assert_eq!(setup.mover_at(4), Side::A);
        assert_eq!(setup.mover_at(5), Side::B);
    }

    #[test]
    fn fresh_pair_is_in_turn_order() {
        let a = fighter(0).with_roll(DiceRoll::new(1, 0));
        let b = fighter(1).with_roll(DiceRoll::new(0, 2));
        let (first, second) = DuelSetup::new(a, b).fresh_pair();
        assert_eq!(first, b);
        assert_eq!(second, a);
    }

    #[test]
    fn checked_rejects_oversized_budgets() {
        let a = fighter(0).with_roll(DiceRoll::new(3, 1));
        let b = fighter(0).with_roll(DiceRoll::new(2, 2));
        let config = DuelConfig::new().with_max_total_dice(7);

        let err = DuelSetup::checked(a, b, &config).unwrap_err();
        assert_eq!(err, SetupError::DiceBudgetExceeded { total: 8, max: 7 });
        assert_eq!(err.severity(), ErrorSeverity::Validation);

        let config = config.with_max_total_dice(8);
        assert!(DuelSetup::checked(a, b, &config).is_ok());
    }

    #[test]
    fn checked_rejects_budgets_past_u32_range() {
        let a = fighter(0).with_roll(DiceRoll::new(u32::MAX, 1));
        let b = fighter(0);

        let err = DuelSetup::checked(a, b, &DuelConfig::default()).unwrap_err();
        assert_eq!(
            err,
            SetupError::DiceBudgetExceeded {
                total: u64::from(u32::MAX) + 1,
                max: DuelConfig::DEFAULT_MAX_TOTAL_DICE,
            }
        );

        // even the largest configurable budget is exceeded
        let b = fighter(0).with_roll(DiceRoll::new(u32::MAX, u32::MAX));
        let config = DuelConfig::new().with_max_total_dice(u32::MAX);
        assert!(DuelSetup::checked(a, b, &config).is_err());
    }
}
