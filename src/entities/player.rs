//! Player character
//!
//! Stats, experience, and inventory for the one character a session has.

use serde::{Deserialize, Serialize};

use crate::data::PlayerBase;
use crate::items::{Inventory, Item, ItemEffect};
use crate::progression::{next_threshold, DEFENSE_PER_LEVEL, HEALTH_PER_LEVEL, STRENGTH_PER_LEVEL};

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Current health, always within `0..=max_health`
    pub health: i32,
    pub max_health: i32,
    pub strength: i32,
    pub defense: i32,
    /// Starts at 1
    pub level: u32,
    pub exp: u32,
    pub exp_to_next_level: u32,
    pub inventory: Inventory,
}

impl Player {
    /// Create a level 1 player at full health
    pub fn new(name: impl Into<String>, base: PlayerBase) -> Self {
        Self {
            name: name.into(),
            health: base.max_health,
            max_health: base.max_health,
            strength: base.strength,
            defense: base.defense,
            level: 1,
            exp: 0,
            exp_to_next_level: base.exp_to_next_level,
            inventory: Inventory::new(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Take damage, returns the amount actually lost
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let actual = amount.clamp(0, self.health.max(0));
        self.health -= actual;
        actual
    }

    /// Heal up to max health, returns the amount actually restored
    pub fn heal(&mut self, amount: i32) -> i32 {
        let actual = amount.clamp(0, self.max_health - self.health);
        self.health += actual;
        actual
    }

    /// Apply an item's effect to the player's stats
    pub fn apply(&mut self, item: &Item) {
        match item.effect {
            ItemEffect::Healing(amount) => {
                self.heal(amount);
            }
            ItemEffect::Weapon(bonus) => self.strength += bonus,
            ItemEffect::Armor(bonus) => self.defense += bonus,
        }
    }

    /// Add experience and resolve every level-up it pays for.
    ///
    /// Returns the number of levels gained.
    pub fn gain_exp(&mut self, amount: u32) -> u32 {
        self.exp = self.exp.saturating_add(amount);
        let mut gained = 0;
        while self.exp >= self.exp_to_next_level {
            self.level_up();
            gained += 1;
        }
        gained
    }

    fn level_up(&mut self) {
        self.exp -= self.exp_to_next_level;
        self.exp_to_next_level = next_threshold(self.exp_to_next_level);
        self.level += 1;

        self.max_health += HEALTH_PER_LEVEL;
        self.health = self.max_health;
        self.strength += STRENGTH_PER_LEVEL;
        self.defense += DEFENSE_PER_LEVEL;
    }

    /// Remaining health in 0.0..=1.0 for health bars
    pub fn health_ratio(&self) -> f64 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (self.health.max(0) as f64 / self.max_health as f64).min(1.0)
    }

    /// Progress toward the next level in 0.0..=1.0
    pub fn exp_ratio(&self) -> f64 {
        if self.exp_to_next_level == 0 {
            return 0.0;
        }
        (self.exp as f64 / self.exp_to_next_level as f64).min(1.0)
    }
}
