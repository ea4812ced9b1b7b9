//! Player and enemy entities

pub mod player;
pub mod enemies;

pub use player::Player;
pub use enemies::Enemy;
