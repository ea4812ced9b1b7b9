//! The location graph of a session
//!
//! Built from validated templates. Items found while playing are removed
//! here, so each item can be picked up once per session.

use crate::data::DataManager;
use super::location::Location;

/// All locations of a session
#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    locations: Vec<Location>,
}

impl Map {
    /// Build the map from validated data.
    ///
    /// Item references that do not resolve are skipped; validation rejects
    /// them before a session gets here.
    pub fn from_data(data: &DataManager) -> Self {
        let locations = data
            .locations
            .templates
            .iter()
            .map(|t| Location {
                id: t.id.clone(),
                name: t.name.clone(),
                description: t.description.clone(),
                actions: t.actions.clone(),
                items: t
                    .items
                    .iter()
                    .filter_map(|id| data.items.find(id).cloned())
                    .collect(),
                enemy_chance: t.enemy_chance,
                possible_enemies: t.possible_enemies.clone(),
            })
            .collect();
        Self { locations }
    }

    /// Index of a location, stable for the lifetime of the map
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.locations.iter().position(|l| l.id == id)
    }

    /// Location at an index obtained from [`Map::index_of`]
    pub fn at(&self, index: usize) -> &Location {
        &self.locations[index]
    }

    pub fn at_mut(&mut self, index: usize) -> &mut Location {
        &mut self.locations[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_data() {
        let map = Map::from_data(&DataManager::default());
        assert_eq!(map.locations.len(), 8);
        assert_eq!(map.locations.iter().map(|l| l.items.len()).sum::<usize>(), 5);

        let edge = map.at(map.index_of("forest_edge").unwrap());
        assert_eq!(edge.items[0].id, "small_potion");
        let targets: Vec<_> = edge.actions.iter().map(|a| a.target.as_str()).collect();
        assert_eq!(targets, ["deep_forest", "old_hut"]);
    }

    #[test]
    fn test_every_path_resolves() {
        let map = Map::from_data(&DataManager::default());
        for location in &map.locations {
            for action in &location.actions {
                assert!(map.index_of(&action.target).is_some(), "{} -> {}", location.id, action.target);
            }
        }
    }

    #[test]
    fn test_take_item_is_fifo() {
        let mut map = Map::from_data(&DataManager::default());
        let index = map.index_of("forest_edge").unwrap();
        let edge = map.at_mut(index);
        let first = edge.take_item().unwrap();
        assert_eq!(first.id, "small_potion");
        assert!(edge.take_item().is_none());
        assert!(!edge.has_items());
    }
}
