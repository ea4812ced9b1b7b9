//! Game module - Core game logic and state management

mod state;
mod snapshot;
pub mod dice;
pub mod journal;

pub use state::{Game, Rejected};
pub use snapshot::Snapshot;
pub use dice::{Dice, RandomDice, ScriptedDice};
pub use journal::{GameLog, LogCategory, LogEntry};
