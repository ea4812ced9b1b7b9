//! Progression systems

pub mod xp;

pub use xp::{next_threshold, level_title, HEALTH_PER_LEVEL, STRENGTH_PER_LEVEL, DEFENSE_PER_LEVEL};
