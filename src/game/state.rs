//! Game state machine
//!
//! A [`Game`] is one playthrough: the player, the location graph with its
//! remaining loot, the enemy being fought (if any), and the log. Every
//! public operation runs to completion and leaves the session consistent,
//! so a UI can render [`Game::snapshot`] after each call.

use thiserror::Error;

use crate::combat::calculate_damage;
use crate::data::{DataError, DataManager};
use crate::entities::{Enemy, Player};
use crate::items::ItemEffect;
use crate::world::{Location, Map};

use super::dice::{Dice, RandomDice};
use super::journal::{GameLog, LogCategory, LogEntry};
use super::snapshot::Snapshot;

/// All possible game states
#[derive(Debug, Clone, PartialEq)]
pub enum GameState {
    /// Walking between locations
    Exploring,
    /// Fighting; the enemy exists only while this state lasts
    InCombat(Enemy),
    /// Player died; only a reset leaves this state
    GameOver,
}

/// An action the current state does not allow.
///
/// The message is player-facing and is written to the log before the
/// rejection is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejected {
    #[error("You can't move during combat!")]
    MoveInCombat,
    #[error("You can't search during combat!")]
    SearchInCombat,
    #[error("You can't rest during combat!")]
    RestInCombat,
    #[error("There is nothing to attack.")]
    NotInCombat,
    #[error("You have fallen. Start a new game to continue.")]
    GameOver,
    #[error("There is no path to '{0}'.")]
    UnknownLocation(String),
    #[error("You don't have '{0}'.")]
    ItemNotHeld(String),
}

impl Rejected {
    /// Log category for the rejection message
    pub fn category(&self) -> LogCategory {
        match self {
            Rejected::UnknownLocation(_) | Rejected::ItemNotHeld(_) => LogCategory::Normal,
            _ => LogCategory::Combat,
        }
    }
}

/// The main game struct that holds all session data
pub struct Game {
    /// Pristine tables, used to rebuild the session on reset
    data: DataManager,
    /// Location graph with the loot not yet found
    map: Map,
    player: Player,
    /// Index of the current location in `map`
    location: usize,
    /// Index of the start location in `map`
    start: usize,
    state: GameState,
    log: GameLog,
    dice: Box<dyn Dice>,
}

impl Game {
    /// Start a session with real randomness
    pub fn new(data: DataManager) -> Result<Self, DataError> {
        Self::with_dice(data, RandomDice::new())
    }

    /// Start a session rolling with the given dice
    pub fn with_dice(data: DataManager, dice: impl Dice + 'static) -> Result<Self, DataError> {
        data.validate()?;
        let map = Map::from_data(&data);
        let start = map
            .index_of(&data.rules.start_location)
            .ok_or_else(|| DataError::UnknownStartLocation(data.rules.start_location.clone()))?;
        let player = Player::new(data.rules.player_name.clone(), data.rules.player);

        let mut game = Self {
            data,
            map,
            player,
            location: start,
            start,
            state: GameState::Exploring,
            log: GameLog::new(),
            dice: Box::new(dice),
        };
        game.welcome();
        Ok(game)
    }

    fn welcome(&mut self) {
        self.add_message("Welcome to the world of adventure!", LogCategory::Location);
        log::info!("New session at {}", self.current_location().id);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    fn set_state(&mut self, state: GameState) {
        log::debug!("State transition: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn current_location(&self) -> &Location {
        self.map.at(self.location)
    }

    /// The enemy being fought, present exactly when in combat
    pub fn current_enemy(&self) -> Option<&Enemy> {
        match &self.state {
            GameState::InCombat(enemy) => Some(enemy),
            _ => None,
        }
    }

    pub fn is_in_combat(&self) -> bool {
        matches!(self.state, GameState::InCombat(_))
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.state, GameState::GameOver)
    }

    /// Every log entry of this session
    pub fn log(&self) -> &[LogEntry] {
        self.log.entries()
    }

    /// Log entries appended after the first `count`
    pub fn log_since(&self, count: usize) -> &[LogEntry] {
        self.log.since(count)
    }

    /// Immutable view of the whole session, full log included
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self, 0)
    }

    /// Like [`Game::snapshot`], but carrying only the last `lines` log entries
    pub fn recent_snapshot(&self, lines: usize) -> Snapshot {
        Snapshot::capture(self, self.log.len().saturating_sub(lines))
    }

    /// Add a message to the log
    fn add_message(&mut self, text: impl Into<String>, category: LogCategory) {
        self.log.push(text, category);
    }

    fn reject(&mut self, rejected: Rejected) -> Result<(), Rejected> {
        log::warn!("Rejected action: {:?}", rejected);
        self.add_message(rejected.to_string(), rejected.category());
        Err(rejected)
    }

    /// Allow the action only while exploring
    fn require_exploring(&mut self, in_combat: Rejected) -> Result<(), Rejected> {
        match self.state {
            GameState::Exploring => Ok(()),
            GameState::InCombat(_) => self.reject(in_combat),
            GameState::GameOver => self.reject(Rejected::GameOver),
        }
    }

    // =========================================================================
    // Exploration
    // =========================================================================

    /// Travel to a location, possibly running into an enemy there
    pub fn move_to(&mut self, target: &str) -> Result<(), Rejected> {
        self.require_exploring(Rejected::MoveInCombat)?;
        let Some(index) = self.map.index_of(target) else {
            return self.reject(Rejected::UnknownLocation(target.to_string()));
        };

        self.location = index;
        let name = self.current_location().name.clone();
        self.add_message(format!("You moved to: {}", name), LogCategory::Location);
        log::debug!("Moved to {}", target);

        let chance = self.current_location().enemy_chance;
        if self.dice.roll() < chance {
            self.encounter();
        }
        Ok(())
    }

    /// Spawn a random enemy from the current location's roster
    fn encounter(&mut self) {
        let roster_len = self.current_location().possible_enemies.len();
        if roster_len == 0 {
            log::error!("Encounter rolled at {} with no enemies", self.current_location().id);
            return;
        }
        let pick = self.dice.pick(roster_len);
        let enemy_id = &self.current_location().possible_enemies[pick];
        let Some(template) = self.data.enemies.find(enemy_id) else {
            log::error!("Encounter picked unknown enemy {}", enemy_id);
            return;
        };

        let enemy = Enemy::spawn(template);
        log::info!("Encounter: {} at {}", enemy.template_id, self.current_location().id);
        self.add_message(format!("A {} attacks you!", enemy.name), LogCategory::Combat);
        self.set_state(GameState::InCombat(enemy));
    }

    /// Pick up the first item lying at the current location
    pub fn search(&mut self) -> Result<(), Rejected> {
        self.require_exploring(Rejected::SearchInCombat)?;

        match self.map.at_mut(self.location).take_item() {
            Some(item) => {
                self.add_message(format!("You found {}!", item.name), LogCategory::Item);
                self.player.inventory.add_item(item);
            }
            None => {
                self.add_message(
                    "You searched the area but found nothing.",
                    LogCategory::Location,
                );
            }
        }
        Ok(())
    }

    /// Recover a fixed amount of health
    pub fn rest(&mut self) -> Result<(), Rejected> {
        self.require_exploring(Rejected::RestInCombat)?;

        let healed = self.player.heal(self.data.rules.rest_heal);
        self.add_message(
            format!("You rested and recovered {} health.", healed),
            LogCategory::Item,
        );
        Ok(())
    }

    /// Use (consume) an item from the inventory
    pub fn use_item(&mut self, item_id: &str) -> Result<(), Rejected> {
        if self.is_game_over() {
            return self.reject(Rejected::GameOver);
        }
        let Some(item) = self.player.inventory.remove_by_id(item_id) else {
            return self.reject(Rejected::ItemNotHeld(item_id.to_string()));
        };

        self.player.apply(&item);
        let message = match item.effect {
            ItemEffect::Healing(v) => format!("You used {} and restored {} health.", item.name, v),
            ItemEffect::Weapon(v) => format!("You equipped {} and gained {} strength.", item.name, v),
            ItemEffect::Armor(v) => format!("You equipped {} and gained {} defense.", item.name, v),
        };
        self.add_message(message, LogCategory::Item);
        Ok(())
    }

    // =========================================================================
    // Combat
    // =========================================================================

    /// Hit the current enemy; it strikes back unless the hit was lethal
    pub fn attack(&mut self) -> Result<(), Rejected> {
        match self.state {
            GameState::InCombat(_) => {}
            GameState::Exploring => return self.reject(Rejected::NotInCombat),
            GameState::GameOver => return self.reject(Rejected::GameOver),
        }
        let GameState::InCombat(enemy) = &mut self.state else {
            return Ok(());
        };

        let damage = calculate_damage(self.player.strength, enemy.defense);
        enemy.take_damage(damage);
        let lethal = enemy.is_dead();
        let name = enemy.name.clone();
        self.add_message(
            format!("You attacked the {} and dealt {} damage!", name, damage),
            LogCategory::Combat,
        );

        if lethal {
            self.defeat_enemy();
        } else {
            self.enemy_attack();
        }
        Ok(())
    }

    fn enemy_attack(&mut self) {
        let GameState::InCombat(enemy) = &self.state else {
            return;
        };
        let name = enemy.name.clone();
        let damage = calculate_damage(enemy.strength, self.player.defense);
        self.player.take_damage(damage);

        self.add_message(
            format!("The {} attacked you and dealt {} damage!", name, damage),
            LogCategory::Combat,
        );
        if self.player.is_dead() {
            self.player_died(&name);
        }
    }

    fn defeat_enemy(&mut self) {
        let GameState::InCombat(enemy) = &self.state else {
            return;
        };
        let name = enemy.name.clone();
        let reward = enemy.exp_reward;

        self.add_message(
            format!("You defeated the {}! Gained {} experience.", name, reward),
            LogCategory::Combat,
        );
        self.grant_exp(reward);

        if self.dice.roll() < self.data.rules.drop_chance {
            if let Some(item) = self.data.items.find(&self.data.rules.drop_item).cloned() {
                self.add_message(format!("You found {}!", item.name), LogCategory::Item);
                self.player.inventory.add_item(item);
            }
        }

        log::info!("Defeated {}", name);
        self.set_state(GameState::Exploring);
    }

    fn grant_exp(&mut self, amount: u32) {
        let before = self.player.level;
        let gained = self.player.gain_exp(amount);
        for level in before + 1..=before + gained {
            log::info!("Level up: {}", level);
            self.add_message(
                format!("Congratulations! You reached level {}! Your stats have improved.", level),
                LogCategory::Location,
            );
        }
    }

    fn player_died(&mut self, killer: &str) {
        log::info!("Player killed by {} at {}", killer, self.current_location().id);
        self.add_message("You have fallen! Game over.", LogCategory::Combat);
        self.set_state(GameState::GameOver);
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Start over: fresh player, start location, untouched loot, empty log
    pub fn reset(&mut self) {
        self.map = Map::from_data(&self.data);
        self.player = Player::new(self.data.rules.player_name.clone(), self.data.rules.player);
        self.location = self.start;
        self.log = GameLog::new();
        self.set_state(GameState::Exploring);
        self.welcome();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ScriptedDice;
    use crate::game::dice::HIGHEST_ROLL;

    /// A game whose dice replay `rolls`
    fn game(rolls: &[f64]) -> Game {
        Game::with_dice(DataManager::default(), ScriptedDice::new(rolls.to_vec())).unwrap()
    }

    /// Walk into the hut and meet its goblin
    fn fight_goblin(rolls: &[f64]) -> Game {
        let mut script = vec![0.0, 0.0];
        script.extend_from_slice(rolls);
        let mut g = game(&script);
        // 0.0 < 0.1 triggers the hut encounter, 0.0 picks its goblin
        g.move_to("old_hut").unwrap();
        assert!(g.is_in_combat());
        g
    }

    fn last_message(g: &Game) -> &str {
        g.log().last().map(|e| e.message.as_str()).unwrap_or("")
    }

    fn holds(g: &Game, item_id: &str) -> bool {
        g.player().inventory.items().iter().any(|i| i.id == item_id)
    }

    #[test]
    fn test_new_session() {
        let g = game(&[]);
        assert_eq!(&g.state, &GameState::Exploring);
        assert_eq!(g.current_location().id, "forest_edge");
        assert!(g.current_enemy().is_none());
        assert_eq!(g.log().len(), 1);
        assert_eq!(g.log()[0].category, LogCategory::Location);
    }

    #[test]
    fn test_invalid_data_is_rejected_up_front() {
        let mut data = DataManager::default();
        data.rules.start_location = "nowhere".to_string();
        assert!(matches!(
            Game::with_dice(data, ScriptedDice::default()),
            Err(DataError::UnknownStartLocation(_))
        ));

        let mut data = DataManager::default();
        data.items.templates[0].effect = ItemEffect::Healing(-10);
        assert!(matches!(
            Game::with_dice(data, ScriptedDice::default()),
            Err(DataError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_move_without_encounter() {
        let mut g = game(&[0.5]);
        g.move_to("deep_forest").unwrap();
        assert_eq!(g.current_location().id, "deep_forest");
        assert!(!g.is_in_combat());
        assert_eq!(last_message(&g), "You moved to: Deep Forest");
    }

    #[test]
    fn test_move_with_encounter_picks_from_roster() {
        // 0.3 < 0.4 triggers; 0.6 picks the second of [goblin, orc]
        let mut g = game(&[0.3, 0.6]);
        g.move_to("deep_forest").unwrap();
        let enemy = g.current_enemy().unwrap();
        assert_eq!(enemy.template_id, "orc");
        assert_eq!(enemy.health, enemy.max_health);
        assert_eq!(g.log().last().map(|e| e.category), Some(LogCategory::Combat));
    }

    #[test]
    fn test_roll_equal_to_chance_does_not_encounter() {
        let mut g = game(&[0.4]);
        g.move_to("deep_forest").unwrap();
        assert!(!g.is_in_combat());
    }

    #[test]
    fn test_zero_and_certain_chances() {
        let mut data = DataManager::default();
        data.locations.templates.iter_mut()
            .filter(|l| l.id == "hilltop")
            .for_each(|l| l.enemy_chance = 0.0);
        let mut g = Game::with_dice(data, ScriptedDice::new([0.0])).unwrap();
        g.move_to("hilltop").unwrap();
        assert!(!g.is_in_combat());

        // Exhausted dice roll just under 1.0; the lair still always has its dragon
        let mut g = game(&[]);
        g.move_to("dragon_lair").unwrap();
        assert_eq!(g.current_enemy().map(|e| e.template_id.as_str()), Some("dragon"));
        assert!(HIGHEST_ROLL < 1.0);
    }

    #[test]
    fn test_move_in_combat_is_rejected() {
        let mut g = fight_goblin(&[]);
        let location = g.current_location().id.clone();
        let enemy = g.current_enemy().cloned();

        assert_eq!(g.move_to("forest_edge"), Err(Rejected::MoveInCombat));
        assert_eq!(g.current_location().id, location);
        assert_eq!(g.current_enemy().cloned(), enemy);
        assert!(g.is_in_combat());
        assert_eq!(last_message(&g), "You can't move during combat!");
    }

    #[test]
    fn test_move_to_unknown_location() {
        let mut g = game(&[]);
        assert_eq!(
            g.move_to("castle"),
            Err(Rejected::UnknownLocation("castle".to_string()))
        );
        assert_eq!(g.current_location().id, "forest_edge");
    }

    #[test]
    fn test_goblin_scenario() {
        let mut g = fight_goblin(&[]);
        g.attack().unwrap();
        assert_eq!(g.current_enemy().map(|e| e.health), Some(22));
        assert_eq!(g.player().health, 97);

        let combat: Vec<_> = g.log().iter().rev().take(2).map(|e| e.message.clone()).collect();
        assert_eq!(combat[1], "You attacked the Goblin and dealt 8 damage!");
        assert_eq!(combat[0], "The Goblin attacked you and dealt 3 damage!");
    }

    #[test]
    fn test_log_since_returns_entries_of_each_call() {
        let mut g = game(&[0.0, 0.0]);
        let before = g.log().len();
        g.move_to("old_hut").unwrap();
        let moved: Vec<_> = g
            .log_since(before)
            .iter()
            .map(|e| (e.message.as_str(), e.category))
            .collect();
        assert_eq!(
            moved,
            [
                ("You moved to: Old Hut", LogCategory::Location),
                ("A Goblin attacks you!", LogCategory::Combat),
            ]
        );

        let before = g.log().len();
        g.attack().unwrap();
        let fought: Vec<_> = g.log_since(before).iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            fought,
            [
                "You attacked the Goblin and dealt 8 damage!",
                "The Goblin attacked you and dealt 3 damage!",
            ]
        );
        assert!(g.log_since(g.log().len()).is_empty());
    }

    #[test]
    fn test_lethal_hit_skips_retaliation() {
        // Goblin: 30 hp, takes 8 per hit. Fourth hit is lethal.
        let mut g = fight_goblin(&[HIGHEST_ROLL]);
        for _ in 0..3 {
            g.attack().unwrap();
        }
        assert_eq!(g.player().health, 91);
        g.attack().unwrap();
        assert_eq!(g.player().health, 91);
        assert!(!g.is_in_combat());
        assert!(g.current_enemy().is_none());
        assert_eq!(g.player().exp, 25);
    }

    #[test]
    fn test_defeat_clears_combat_with_and_without_drop() {
        for (roll, expect_drop) in [(0.2, true), (0.8, false)] {
            let mut g = fight_goblin(&[roll]);
            for _ in 0..4 {
                g.attack().unwrap();
            }
            assert_eq!(&g.state, &GameState::Exploring);
            assert!(g.current_enemy().is_none());
            assert_eq!(holds(&g, "small_potion"), expect_drop);
        }
    }

    #[test]
    fn test_attack_when_not_in_combat() {
        let mut g = game(&[]);
        assert_eq!(g.attack(), Err(Rejected::NotInCombat));
        assert_eq!(g.player().health, 100);
    }

    #[test]
    fn test_damage_never_below_one() {
        let mut data = DataManager::default();
        data.rules.player.strength = 1;
        data.rules.player.defense = 50;
        let mut g = Game::with_dice(data, ScriptedDice::new([0.0, 0.0])).unwrap();
        g.move_to("old_hut").unwrap();
        g.attack().unwrap();
        assert_eq!(g.current_enemy().map(|e| e.health), Some(29));
        assert_eq!(g.player().health, 99);
    }

    #[test]
    fn test_death_is_terminal() {
        let mut data = DataManager::default();
        data.rules.player.max_health = 5;
        data.rules.player.strength = 1;
        let mut g = Game::with_dice(data, ScriptedDice::new([0.0, 0.0])).unwrap();
        g.move_to("old_hut").unwrap();

        g.attack().unwrap();
        g.attack().unwrap();
        assert!(g.is_game_over());
        assert_eq!(g.player().health, 0);
        assert!(g.current_enemy().is_none());
        assert_eq!(last_message(&g), "You have fallen! Game over.");

        assert_eq!(g.attack(), Err(Rejected::GameOver));
        assert_eq!(g.move_to("forest_edge"), Err(Rejected::GameOver));
        assert_eq!(g.rest(), Err(Rejected::GameOver));
        assert_eq!(g.search(), Err(Rejected::GameOver));
        assert_eq!(g.player().health, 0);

        g.reset();
        assert_eq!(&g.state, &GameState::Exploring);
        assert_eq!(g.player().health, 5);
    }

    #[test]
    fn test_search_twice() {
        let mut g = game(&[]);
        g.search().unwrap();
        assert!(holds(&g, "small_potion"));
        assert_eq!(last_message(&g), "You found Small Health Potion!");

        g.search().unwrap();
        assert_eq!(g.player().inventory.count(), 1);
        assert_eq!(last_message(&g), "You searched the area but found nothing.");
        assert!(g.current_location().items.is_empty());
    }

    #[test]
    fn test_items_are_found_once_per_session() {
        let mut g = game(&[HIGHEST_ROLL, HIGHEST_ROLL]);
        g.search().unwrap();
        g.move_to("old_hut").unwrap();
        g.move_to("forest_edge").unwrap();
        g.search().unwrap();
        assert_eq!(g.player().inventory.count(), 1);
    }

    #[test]
    fn test_search_and_rest_rejected_in_combat() {
        let mut g = fight_goblin(&[]);
        assert_eq!(g.search(), Err(Rejected::SearchInCombat));
        assert_eq!(g.rest(), Err(Rejected::RestInCombat));
        assert!(g.current_location().has_items());
    }

    #[test]
    fn test_rest_caps_at_max() {
        let mut g = fight_goblin(&[HIGHEST_ROLL]);
        g.attack().unwrap();
        for _ in 0..3 {
            g.attack().unwrap();
        }
        assert_eq!(g.player().health, 91);
        g.rest().unwrap();
        assert_eq!(g.player().health, 100);
        assert_eq!(last_message(&g), "You rested and recovered 9 health.");
    }

    #[test]
    fn test_use_healing_item_caps_at_max() {
        let mut g = fight_goblin(&[]);
        g.attack().unwrap();
        // Hand over a large potion directly
        let potion = g.data.items.find("large_potion").cloned().unwrap();
        g.player.inventory.add_item(potion);

        g.use_item("large_potion").unwrap();
        assert_eq!(g.player().health, 100);
        assert!(g.player().inventory.is_empty());
        assert!(g.is_in_combat());
        assert_eq!(last_message(&g), "You used Large Health Potion and restored 60 health.");
    }

    #[test]
    fn test_use_equipment() {
        let mut g = game(&[HIGHEST_ROLL]);
        g.move_to("deep_forest").unwrap();
        g.search().unwrap();
        g.use_item("iron_sword").unwrap();
        assert_eq!(g.player().strength, 15);
        assert!(!holds(&g, "iron_sword"));
    }

    #[test]
    fn test_use_item_not_held() {
        let mut g = game(&[]);
        assert_eq!(
            g.use_item("iron_sword"),
            Err(Rejected::ItemNotHeld("iron_sword".to_string()))
        );
        assert_eq!(g.player().strength, 10);
    }

    #[test]
    fn test_level_up_from_combat() {
        let mut data = DataManager::default();
        data.rules.player.exp_to_next_level = 20;
        let mut g = Game::with_dice(data, ScriptedDice::new([0.0, 0.0, HIGHEST_ROLL])).unwrap();
        g.move_to("old_hut").unwrap();
        for _ in 0..4 {
            g.attack().unwrap();
        }
        assert_eq!(g.player().level, 2);
        assert_eq!(g.player().exp, 5);
        assert_eq!(g.player().health, g.player().max_health);
        assert!(g
            .log()
            .iter()
            .any(|e| e.message.starts_with("Congratulations! You reached level 2!")));
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut g = fight_goblin(&[]);
        g.attack().unwrap();
        g.reset();

        assert_eq!(&g.state, &GameState::Exploring);
        assert_eq!(g.current_location().id, "forest_edge");
        assert_eq!(g.player().health, 100);
        assert_eq!(g.log().len(), 1);

        g.search().unwrap();
        g.reset();
        assert!(g.current_location().has_items());
        assert!(g.player().inventory.is_empty());
        assert_eq!(g.map, Map::from_data(&g.data));
    }

    #[test]
    fn test_health_stays_in_bounds_over_random_play() {
        use crate::game::RandomDice;

        let mut g = Game::with_dice(DataManager::default(), RandomDice::seeded(3)).unwrap();
        for step in 0..2000 {
            let _ = match step % 5 {
                0 => {
                    let target = g.current_location().actions[0].target.clone();
                    g.move_to(&target)
                }
                1 | 2 => g.attack(),
                3 => g.search(),
                _ => g.rest(),
            };
            let p = g.player();
            assert!(p.health >= 0 && p.health <= p.max_health);
            assert_eq!(g.is_in_combat(), g.current_enemy().is_some());
            assert!(p.exp < p.exp_to_next_level);
            if g.is_game_over() {
                g.reset();
            }
        }
    }
}
