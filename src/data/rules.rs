//! Session rules
//!
//! Starting stats and the fixed numbers the session uses outside of the
//! item/enemy/location tables.

use serde::{Deserialize, Serialize};

/// Stats a fresh player starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBase {
    pub max_health: i32,
    pub strength: i32,
    pub defense: i32,
    /// XP needed to reach level 2
    pub exp_to_next_level: u32,
}

impl Default for PlayerBase {
    fn default() -> Self {
        Self {
            max_health: 100,
            strength: 10,
            defense: 5,
            exp_to_next_level: 100,
        }
    }
}

/// Game rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    /// Location ID a new session starts in
    pub start_location: String,
    pub player_name: String,
    pub player: PlayerBase,
    /// Health restored by resting
    pub rest_heal: i32,
    /// Chance in [0, 1] that a defeated enemy drops `drop_item`
    pub drop_chance: f64,
    /// Item template ID dropped by defeated enemies
    pub drop_item: String,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            start_location: "forest_edge".to_string(),
            player_name: "Adventurer".to_string(),
            player: PlayerBase::default(),
            rest_heal: 20,
            drop_chance: 0.5,
            drop_item: "small_potion".to_string(),
        }
    }
}

/// Create default rules (hardcoded fallback)
pub fn default_rules() -> Rules {
    Rules::default()
}
