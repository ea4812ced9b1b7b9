//! Enemy instances
//!
//! An [`Enemy`] is a live copy of an [`EnemyTemplate`] that only exists
//! for the duration of one fight.

use serde::{Deserialize, Serialize};

use crate::data::EnemyTemplate;

/// An enemy in combat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Template this enemy was spawned from
    pub template_id: String,
    pub name: String,
    pub description: String,
    pub health: i32,
    pub max_health: i32,
    pub strength: i32,
    pub defense: i32,
    pub exp_reward: u32,
}

impl Enemy {
    /// Spawn a fresh enemy at full health
    pub fn spawn(template: &EnemyTemplate) -> Self {
        Self {
            template_id: template.id.clone(),
            name: template.name.clone(),
            description: template.description.clone(),
            health: template.max_health,
            max_health: template.max_health,
            strength: template.strength,
            defense: template.defense,
            exp_reward: template.exp_reward,
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

    /// Remaining health in 0.0..=1.0 for health bars
    pub fn health_ratio(&self) -> f64 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (self.health.max(0) as f64 / self.max_health as f64).min(1.0)
    }
}
