//! Damage calculation and application.
//!
//! Pure functions shared by the fighter state transitions.

use crate::action::Action;
use crate::fighter::Weapon;

/// Returns the damage an attack action deals with `weapon`.
///
/// # Returns
///
/// `Some(normal)` for `RegularAttack`, `Some(critical)` for `CriticalAttack`,
/// `None` for every other action.
pub const fn attack_damage(weapon: &Weapon, action: Action) -> Option<u32> {
    match action {
        Action::RegularAttack => Some(weapon.normal),
        Action::CriticalAttack => Some(weapon.critical),
        _ => None,
    }
}

/// Apply damage to current health.
///
/// # Returns
///
/// New health value (clamped to 0)
pub const fn apply_damage(current_health: u32, damage: u32) -> u32 {
    current_health.saturating_sub(damage)
}
