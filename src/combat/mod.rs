//! Combat system

pub mod damage;

pub use damage::{calculate_damage, MIN_DAMAGE};
