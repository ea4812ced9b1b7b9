//! Item system

pub mod item;
pub mod inventory;

pub use item::{Item, ItemId, ItemEffect};
pub use inventory::Inventory;
