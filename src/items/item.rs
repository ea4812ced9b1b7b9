//! Item definitions
//!
//! Items are immutable templates; what an item does is carried by its
//! [`ItemEffect`] tag.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Item identifier as used by the data tables (e.g. `"small_potion"`)
pub type ItemId = String;

/// What happens when an item is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    /// Restores health, capped at max health
    Healing(i32),
    /// Permanently raises strength
    Weapon(i32),
    /// Permanently raises defense
    Armor(i32),
}

impl ItemEffect {
    /// Magnitude of the effect
    pub fn value(&self) -> i32 {
        match *self {
            ItemEffect::Healing(v) | ItemEffect::Weapon(v) | ItemEffect::Armor(v) => v,
        }
    }
}

impl fmt::Display for ItemEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemEffect::Healing(v) => write!(f, "+{} HP", v),
            ItemEffect::Weapon(v) => write!(f, "+{} STR", v),
            ItemEffect::Armor(v) => write!(f, "+{} DEF", v),
        }
    }
}

/// An item template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub effect: ItemEffect,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, effect: ItemEffect) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            effect,
        }
    }
}
