//! Item templates for data-driven content

use serde::{Deserialize, Serialize};
use crate::items::{Item, ItemEffect};

/// Collection of item templates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplates {
    pub templates: Vec<Item>,
}

impl ItemTemplates {
    /// Find a template by ID
    pub fn find(&self, id: &str) -> Option<&Item> {
        self.templates.iter().find(|t| t.id == id)
    }
}

/// Create default item templates (hardcoded fallback)
pub fn default_item_templates() -> ItemTemplates {
    ItemTemplates {
        templates: vec![
            Item::new("small_potion", "Small Health Potion", ItemEffect::Healing(30)),
            Item::new("large_potion", "Large Health Potion", ItemEffect::Healing(60)),
            Item::new("iron_sword", "Iron Sword", ItemEffect::Weapon(5)),
            Item::new("steel_armor", "Steel Armor", ItemEffect::Armor(5)),
        ],
    }
}
