//! Locations in a running session

use serde::{Deserialize, Serialize};

use crate::data::LocationAction;
use crate::items::Item;

/// A location with its mutable loot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub description: String,
    pub actions: Vec<LocationAction>,
    /// Items still lying here, in search order
    pub items: Vec<Item>,
    pub enemy_chance: f64,
    pub possible_enemies: Vec<String>,
}

impl Location {
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    /// Take the first remaining item, if any
    pub fn take_item(&mut self) -> Option<Item> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }
}
