//! Enemy templates for data-driven enemy creation
//!
//! These templates are loaded from RON files and used to spawn enemies
//! when an encounter is rolled.

use serde::{Deserialize, Serialize};

/// A template for creating enemies from external data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    /// Unique template ID for reference
    pub id: String,
    /// Display name
    pub name: String,
    /// Starting (and maximum) health
    pub max_health: i32,
    pub strength: i32,
    pub defense: i32,
    /// XP reward for defeating it
    pub exp_reward: u32,
    /// Flavor text shown in the combat panel
    pub description: String,
}

/// Collection of enemy templates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnemyTemplates {
    pub templates: Vec<EnemyTemplate>,
}

impl EnemyTemplates {
    /// Find a template by ID
    pub fn find(&self, id: &str) -> Option<&EnemyTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }
}

/// Create default enemy templates (hardcoded fallback)
pub fn default_enemy_templates() -> EnemyTemplates {
    EnemyTemplates {
        templates: vec![
            EnemyTemplate {
                id: "goblin".to_string(),
                name: "Goblin".to_string(),
                max_health: 30,
                strength: 8,
                defense: 2,
                exp_reward: 25,
                description: "A small but vicious creature with sharp claws.".to_string(),
            },
            EnemyTemplate {
                id: "orc".to_string(),
                name: "Orc".to_string(),
                max_health: 60,
                strength: 12,
                defense: 4,
                exp_reward: 50,
                description: "A big, strong brute swinging a huge club.".to_string(),
            },
            EnemyTemplate {
                id: "dragon".to_string(),
                name: "Dragon".to_string(),
                max_health: 150,
                strength: 20,
                defense: 10,
                exp_reward: 200,
                description: "A mighty winged beast that breathes fire.".to_string(),
            },
        ],
    }
}
