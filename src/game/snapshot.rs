//! Read-only session snapshot
//!
//! Everything a front end needs to draw one frame. Taken after each
//! mutating call; holds no references into the session.

use serde::Serialize;

use crate::entities::{Enemy, Player};
use crate::progression::level_title;
use crate::world::Location;

use super::journal::LogEntry;
use super::state::Game;

/// A copy of the session state for rendering
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub player: Player,
    /// Rank shown next to the level
    pub title: &'static str,
    pub location: Location,
    /// Present exactly when in combat
    pub enemy: Option<Enemy>,
    pub in_combat: bool,
    pub game_over: bool,
    /// Whether searching can still find something here
    pub can_search: bool,
    /// Log entries from the requested offset on
    pub log: Vec<LogEntry>,
}

impl Snapshot {
    /// Copy the session, keeping log entries from index `log_from` on
    pub fn capture(game: &Game, log_from: usize) -> Self {
        let location = game.current_location().clone();
        let in_combat = game.is_in_combat();
        Self {
            player: game.player().clone(),
            title: level_title(game.player().level),
            can_search: !in_combat && !game.is_game_over() && location.has_items(),
            location,
            enemy: game.current_enemy().cloned(),
            in_combat,
            game_over: game.is_game_over(),
            log: game.log_since(log_from).to_vec(),
        }
    }

    /// Render as JSON for non-Rust front ends
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
