//! RON data loader
//!
//! Loads game data from external RON files, with fallback to hardcoded
//! defaults for files that are absent. Whatever is loaded is validated
//! before a session may use it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::enemies::{default_enemy_templates, EnemyTemplates};
use super::error::DataError;
use super::items::{default_item_templates, ItemTemplates};
use super::locations::{default_location_templates, LocationTemplates};
use super::rules::{default_rules, Rules};

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "assets/data";

const ITEMS_FILE: &str = "items.ron";
const ENEMIES_FILE: &str = "enemies.ron";
const LOCATIONS_FILE: &str = "locations.ron";
const RULES_FILE: &str = "rules.ron";

/// Smallest first threshold that still grows on each level-up
const MIN_EXP_THRESHOLD: u32 = 2;

/// Manages all external game data
#[derive(Debug, Clone, PartialEq)]
pub struct DataManager {
    /// Item templates
    pub items: ItemTemplates,
    /// Enemy templates
    pub enemies: EnemyTemplates,
    /// Location graph
    pub locations: LocationTemplates,
    /// Starting stats and fixed numbers
    pub rules: Rules,
}

impl DataManager {
    /// Load every table from `dir` and validate the result.
    ///
    /// A missing file falls back to the built-in table. A file that exists
    /// but cannot be read or parsed is an error.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, DataError> {
        let dir = dir.as_ref();
        let manager = Self {
            items: load_table(dir, ITEMS_FILE, default_item_templates)?,
            enemies: load_table(dir, ENEMIES_FILE, default_enemy_templates)?,
            locations: load_table(dir, LOCATIONS_FILE, default_location_templates)?,
            rules: load_table(dir, RULES_FILE, default_rules)?,
        };
        manager.validate()?;

        log::info!(
            "Loaded {} items, {} enemies, {} locations from {}",
            manager.items.templates.len(),
            manager.enemies.templates.len(),
            manager.locations.templates.len(),
            dir.display()
        );
        Ok(manager)
    }

    /// Check every cross-reference and numeric range in the tables
    pub fn validate(&self) -> Result<(), DataError> {
        check_unique("item", self.items.templates.iter().map(|t| t.id.as_str()))?;
        check_unique("enemy", self.enemies.templates.iter().map(|t| t.id.as_str()))?;
        check_unique("location", self.locations.templates.iter().map(|t| t.id.as_str()))?;

        for item in &self.items.templates {
            if item.effect.value() < 0 {
                return Err(DataError::InvalidValue {
                    field: format!("item '{}' effect", item.id),
                    reason: "must not be negative",
                });
            }
        }

        for enemy in &self.enemies.templates {
            if enemy.max_health <= 0 {
                return Err(DataError::InvalidValue {
                    field: format!("enemy '{}' max_health", enemy.id),
                    reason: "must be positive",
                });
            }
            check_not_negative(enemy.strength, || format!("enemy '{}' strength", enemy.id))?;
            check_not_negative(enemy.defense, || format!("enemy '{}' defense", enemy.id))?;
        }

        for location in &self.locations.templates {
            for action in &location.actions {
                if self.locations.find(&action.target).is_none() {
                    return Err(DataError::UnknownActionTarget {
                        location: location.id.clone(),
                        target: action.target.clone(),
                    });
                }
            }
            for item in &location.items {
                if self.items.find(item).is_none() {
                    return Err(DataError::UnknownItem {
                        context: format!("location '{}'", location.id),
                        item: item.clone(),
                    });
                }
            }
            if !(0.0..=1.0).contains(&location.enemy_chance) {
                return Err(DataError::InvalidEnemyChance {
                    location: location.id.clone(),
                    chance: location.enemy_chance,
                });
            }
            if location.enemy_chance > 0.0 && location.possible_enemies.is_empty() {
                return Err(DataError::NoPossibleEnemies(location.id.clone()));
            }
            for enemy in &location.possible_enemies {
                if self.enemies.find(enemy).is_none() {
                    return Err(DataError::UnknownEnemy {
                        location: location.id.clone(),
                        enemy: enemy.clone(),
                    });
                }
            }
        }

        self.validate_rules()
    }

    fn validate_rules(&self) -> Result<(), DataError> {
        let rules = &self.rules;
        if self.locations.find(&rules.start_location).is_none() {
            return Err(DataError::UnknownStartLocation(rules.start_location.clone()));
        }
        if self.items.find(&rules.drop_item).is_none() {
            return Err(DataError::UnknownItem {
                context: "rules drop_item".to_string(),
                item: rules.drop_item.clone(),
            });
        }
        if !(0.0..=1.0).contains(&rules.drop_chance) {
            return Err(DataError::InvalidDropChance(rules.drop_chance));
        }
        if rules.player.max_health <= 0 {
            return Err(DataError::InvalidValue {
                field: "player.max_health".to_string(),
                reason: "must be positive",
            });
        }
        check_not_negative(rules.player.strength, || "player.strength".to_string())?;
        check_not_negative(rules.player.defense, || "player.defense".to_string())?;
        // Thresholds grow by half, rounded down; below 2 they would never grow
        if rules.player.exp_to_next_level < MIN_EXP_THRESHOLD {
            return Err(DataError::InvalidValue {
                field: "player.exp_to_next_level".to_string(),
                reason: "must be at least 2",
            });
        }
        check_not_negative(rules.rest_heal, || "rest_heal".to_string())
    }
}

impl Default for DataManager {
    fn default() -> Self {
        Self {
            items: default_item_templates(),
            enemies: default_enemy_templates(),
            locations: default_location_templates(),
            rules: default_rules(),
        }
    }
}

fn load_table<T: DeserializeOwned>(
    dir: &Path,
    file: &str,
    fallback: impl FnOnce() -> T,
) -> Result<T, DataError> {
    let path = dir.join(file);
    if !path.exists() {
        log::info!("{} not found, using built-in defaults", path.display());
        return Ok(fallback());
    }

    let content = fs::read_to_string(&path).map_err(|source| DataError::Io {
        path: path.clone(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| DataError::Parse { path, source })
}

fn check_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DataError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DataError::DuplicateId { kind, id: id.to_string() });
        }
    }
    Ok(())
}

fn check_not_negative(value: i32, field: impl FnOnce() -> String) -> Result<(), DataError> {
    if value < 0 {
        return Err(DataError::InvalidValue {
            field: field(),
            reason: "must not be negative",
        });
    }
    Ok(())
}

fn write_table<T: Serialize>(
    dir: &Path,
    file: &str,
    what: &'static str,
    table: &T,
) -> Result<(), DataError> {
    let text = ron::ser::to_string_pretty(table, ron::ser::PrettyConfig::default())
        .map_err(|source| DataError::Serialize { what, source })?;
    let path = dir.join(file);
    fs::write(&path, text).map_err(|source| DataError::Io { path, source })
}

/// Export all default data to RON files for easy editing
pub fn export_default_data(dir: impl AsRef<Path>) -> Result<(), DataError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| DataError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let data = DataManager::default();
    write_table(dir, ITEMS_FILE, "items", &data.items)?;
    write_table(dir, ENEMIES_FILE, "enemies", &data.enemies)?;
    write_table(dir, LOCATIONS_FILE, "locations", &data.locations)?;
    write_table(dir, RULES_FILE, "rules", &data.rules)?;
    Ok(())
}
