//! Damage calculation
//!
//! Flat strength-minus-defense model. Every hit lands and always does
//! at least 1 damage.

/// Minimum damage any hit deals
pub const MIN_DAMAGE: i32 = 1;

/// Damage for a hit of `strength` against `defense`
pub fn calculate_damage(strength: i32, defense: i32) -> i32 {
    strength.saturating_sub(defense).max(MIN_DAMAGE)
}
