//! Data loading and validation errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating game data.
///
/// Any of these means the tables cannot drive a session; they are reported
/// before a game starts rather than surfacing mid-run.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: ron::Error,
    },

    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("start location '{0}' does not exist")]
    UnknownStartLocation(String),

    #[error("location '{location}' has a path to unknown location '{target}'")]
    UnknownActionTarget { location: String, target: String },

    #[error("location '{location}' references unknown enemy '{enemy}'")]
    UnknownEnemy { location: String, enemy: String },

    #[error("{context} references unknown item '{item}'")]
    UnknownItem { context: String, item: String },

    #[error("location '{location}' has enemy chance {chance}, expected a value in [0, 1]")]
    InvalidEnemyChance { location: String, chance: f64 },

    #[error("location '{0}' can trigger encounters but lists no enemies")]
    NoPossibleEnemies(String),

    #[error("drop chance {0} is outside [0, 1]")]
    InvalidDropChance(f64),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: &'static str },
}
