//! Experience and leveling
//!
//! XP thresholds and the stat gains granted on each level-up.

/// Max health gained per level
pub const HEALTH_PER_LEVEL: i32 = 20;
/// Strength gained per level
pub const STRENGTH_PER_LEVEL: i32 = 5;
/// Defense gained per level
pub const DEFENSE_PER_LEVEL: i32 = 2;

/// XP needed for the level after one that needed `current`.
///
/// Each threshold is the previous one times 1.5, rounded down.
pub fn next_threshold(current: u32) -> u32 {
    current.saturating_add(current / 2)
}

/// Get a title/rank based on level
pub fn level_title(level: u32) -> &'static str {
    match level {
        1 => "Wanderer",
        2..=3 => "Scout",
        4..=5 => "Ranger",
        6..=8 => "Warden",
        _ => "Dragonslayer",
    }
}
