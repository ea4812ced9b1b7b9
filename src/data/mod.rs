//! Data loading and external game content
//!
//! This module handles loading game data from external RON files,
//! allowing for data-driven content and easy editing.

pub mod loader;
pub mod items;
pub mod enemies;
pub mod locations;
pub mod rules;
pub mod error;

pub use loader::{DataManager, export_default_data, DEFAULT_DATA_DIR};
pub use items::ItemTemplates;
pub use enemies::{EnemyTemplate, EnemyTemplates};
pub use locations::{LocationAction, LocationTemplate, LocationTemplates};
pub use rules::{PlayerBase, Rules};
pub use error::DataError;
