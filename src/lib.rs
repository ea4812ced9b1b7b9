//! Wildwood - A small terminal text adventure
//!
//! Wander from the forest edge to the dragon's lair, fight what jumps
//! out of the shadows, pick up what others left behind, and grow stronger.

pub mod game;
pub mod world;
pub mod entities;
pub mod combat;
pub mod items;
pub mod progression;
pub mod ui;
pub mod data;

// Re-export commonly used types
pub use game::{Game, Rejected, Snapshot};
pub use data::{DataError, DataManager};
