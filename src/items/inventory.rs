//! Inventory system
//!
//! An ordered bag of items. Insertion order is kept so the UI can show
//! items in the order they were picked up.

use serde::{Deserialize, Serialize};
use super::item::Item;

/// Player inventory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Get current number of items
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add an item at the end
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Get item by index
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Remove the first item with the given ID
    pub fn remove_by_id(&mut self, id: &str) -> Option<Item> {
        let index = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(index))
    }

    /// All items in pickup order
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
