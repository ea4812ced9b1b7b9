//! Location templates
//!
//! Locations are nodes of a directed graph; each action is an edge to
//! another location. Items are referenced by template ID and resolved
//! when the world is built.

use serde::{Deserialize, Serialize};

/// A path out of a location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationAction {
    /// Button text, e.g. "Go deeper into the forest"
    pub text: String,
    /// Destination location ID
    pub target: String,
}

impl LocationAction {
    pub fn new(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target: target.into(),
        }
    }
}

/// A location as described in the data files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub actions: Vec<LocationAction>,
    /// Item template IDs lying here at the start of a session
    #[serde(default)]
    pub items: Vec<String>,
    /// Chance in [0, 1] that entering triggers an encounter
    pub enemy_chance: f64,
    /// Enemy template IDs an encounter can pick from
    #[serde(default)]
    pub possible_enemies: Vec<String>,
}

/// Collection of location templates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationTemplates {
    pub templates: Vec<LocationTemplate>,
}

impl LocationTemplates {
    /// Find a template by ID
    pub fn find(&self, id: &str) -> Option<&LocationTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }
}

fn location(
    id: &str,
    name: &str,
    description: &str,
    actions: Vec<LocationAction>,
    items: &[&str],
    enemy_chance: f64,
    possible_enemies: &[&str],
) -> LocationTemplate {
    LocationTemplate {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        actions,
        items: items.iter().map(|s| s.to_string()).collect(),
        enemy_chance,
        possible_enemies: possible_enemies.iter().map(|s| s.to_string()).collect(),
    }
}

/// Create default location templates (hardcoded fallback)
pub fn default_location_templates() -> LocationTemplates {
    LocationTemplates {
        templates: vec![
            location(
                "forest_edge",
                "Forest Edge",
                "You stand at the edge of a mysterious forest. The trees are tall and ancient, \
                 and the air smells of pine and something unknown.",
                vec![
                    LocationAction::new("Go deeper into the forest", "deep_forest"),
                    LocationAction::new("Explore the old hut", "old_hut"),
                ],
                &["small_potion"],
                0.2,
                &["goblin"],
            ),
            location(
                "deep_forest",
                "Deep Forest",
                "You are in the heart of the forest. Sunlight barely breaks through the thick \
                 canopy, casting strange shadows. Odd sounds echo all around.",
                vec![
                    LocationAction::new("Return to the forest edge", "forest_edge"),
                    LocationAction::new("Explore the cave", "dark_cave"),
                    LocationAction::new("Climb the hill", "hilltop"),
                ],
                &["iron_sword"],
                0.4,
                &["goblin", "orc"],
            ),
            location(
                "old_hut",
                "Old Hut",
                "You are inside an old abandoned hut. It smells of dust and mold. A broken table \
                 stands in the corner and vials line the shelves.",
                vec![
                    LocationAction::new("Leave the hut", "forest_edge"),
                    LocationAction::new("Search the cellar", "hut_cellar"),
                ],
                &["large_potion"],
                0.1,
                &["goblin"],
            ),
            location(
                "hut_cellar",
                "Hut Cellar",
                "A dark, damp cellar. You can barely make out old crates and bottles. \
                 Someone lived here not long ago.",
                vec![LocationAction::new("Go back up to the hut", "old_hut")],
                &["steel_armor"],
                0.3,
                &["orc"],
            ),
            location(
                "dark_cave",
                "Dark Cave",
                "You are inside a gloomy cave. Water drips from the walls and your footsteps \
                 echo into the distance. The air is cold and wet.",
                vec![
                    LocationAction::new("Leave the cave", "deep_forest"),
                    LocationAction::new("Go deeper into the cave", "cave_depths"),
                ],
                &[],
                0.5,
                &["orc"],
            ),
            location(
                "cave_depths",
                "Cave Depths",
                "You are in the deepest part of the cave. There is almost no light, but something \
                 metallic glints ahead, and heat rises from below.",
                vec![
                    LocationAction::new("Return to the entrance", "dark_cave"),
                    LocationAction::new("Explore further", "dragon_lair"),
                ],
                &[],
                0.7,
                &["orc", "dragon"],
            ),
            location(
                "hilltop",
                "Hilltop",
                "From the top of the hill the view stretches for miles. The forest runs to the \
                 horizon and mountains rise in the west.",
                vec![LocationAction::new("Go back down to the forest", "deep_forest")],
                &["large_potion"],
                0.2,
                &["goblin"],
            ),
            location(
                "dragon_lair",
                "Dragon's Lair",
                "A vast cavern piled with gold and jewels. In the middle lies an enormous dragon \
                 that seems to have just woken up.",
                vec![LocationAction::new("Run!", "cave_depths")],
                &[],
                1.0,
                &["dragon"],
            ),
        ],
    }
}
