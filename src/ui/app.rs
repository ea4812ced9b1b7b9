//! Main UI Application
//!
//! Terminal front end. Key presses become calls on [`Game`]; every frame is
//! drawn from a fresh [`Snapshot`], never from the live session.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use crate::game::{Game, LogCategory, Snapshot};

/// Main UI application
pub struct App {
    /// Selected inventory slot
    inventory_cursor: usize,
}

impl App {
    pub fn new() -> Self {
        Self { inventory_cursor: 0 }
    }

    /// Handle a key press. Returns `Ok(true)` when the player wants to quit.
    pub fn handle_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        if key.code == KeyCode::Char('q')
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return Ok(true);
        }

        let outcome = match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                let target = game
                    .current_location()
                    .actions
                    .get(index)
                    .map(|a| a.target.clone());
                match target {
                    Some(target) => game.move_to(&target),
                    None => Ok(()),
                }
            }
            KeyCode::Char('a') => game.attack(),
            KeyCode::Char('s') => game.search(),
            KeyCode::Char('r') => game.rest(),
            KeyCode::Char('n') => {
                game.reset();
                self.inventory_cursor = 0;
                Ok(())
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(game, 1);
                Ok(())
            }
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(game, -1);
                Ok(())
            }
            KeyCode::Enter | KeyCode::Char('u') => {
                let selected = game
                    .player()
                    .inventory
                    .get(self.inventory_cursor)
                    .map(|i| i.id.clone());
                match selected {
                    Some(id) => game.use_item(&id),
                    None => Ok(()),
                }
            }
            _ => Ok(()),
        };

        if let Err(rejected) = outcome {
            log::debug!("Input rejected: {}", rejected);
        }
        self.clamp_cursor(game);
        Ok(false)
    }

    fn move_cursor(&mut self, game: &Game, delta: isize) {
        let count = game.player().inventory.count();
        if count == 0 {
            self.inventory_cursor = 0;
            return;
        }
        let next = (self.inventory_cursor as isize + delta).rem_euclid(count as isize);
        self.inventory_cursor = next as usize;
    }

    fn clamp_cursor(&mut self, game: &Game) {
        let count = game.player().inventory.count();
        if self.inventory_cursor >= count {
            self.inventory_cursor = count.saturating_sub(1);
        }
    }

    /// Draw one frame
    pub fn render(&self, frame: &mut Frame, game: &Game) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(12),
                Constraint::Length(10),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(30)])
            .split(rows[0]);

        // Only the journal lines that fit inside its borders
        let snap = game.recent_snapshot(rows[1].height.saturating_sub(2) as usize);

        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(3)])
            .split(columns[0]);

        self.render_stats(frame, &snap, sidebar[0]);
        self.render_inventory(frame, &snap, sidebar[1]);
        self.render_scene(frame, &snap, columns[1]);
        self.render_log(frame, &snap, rows[1]);
        self.render_help(frame, &snap, rows[2]);
    }

    fn render_stats(&self, frame: &mut Frame, snap: &Snapshot, area: Rect) {
        let p = &snap.player;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", p.name))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(Color::Red))
                .label(format!("HP {}/{}", p.health, p.max_health))
                .ratio(p.health_ratio()),
            parts[0],
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(Color::Yellow))
                .label(format!("XP {}/{}", p.exp, p.exp_to_next_level))
                .ratio(p.exp_ratio()),
            parts[1],
        );

        let lines = vec![
            Line::from(vec![
                Span::raw("Level "),
                Span::styled(p.level.to_string(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", snap.title), Style::default().fg(Color::Cyan)),
            ]),
            Line::from(format!("STR {}   DEF {}", p.strength, p.defense)),
        ];
        frame.render_widget(Paragraph::new(lines), parts[3]);
    }

    fn render_inventory(&self, frame: &mut Frame, snap: &Snapshot, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Inventory ")
            .border_style(Style::default().fg(Color::DarkGray));

        let items = snap.player.inventory.items();
        let lines: Vec<Line> = if items.is_empty() {
            vec![Line::from(Span::styled("Inventory is empty", Style::default().fg(Color::DarkGray)))]
        } else {
            items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let style = if i == self.inventory_cursor {
                        Style::default().fg(Color::Black).bg(Color::Yellow)
                    } else {
                        Style::default().fg(Color::Yellow)
                    };
                    Line::from(Span::styled(format!("{} ({})", item.name, item.effect), style))
                })
                .collect()
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_scene(&self, frame: &mut Frame, snap: &Snapshot, area: Rect) {
        let enemy_height = if snap.enemy.is_some() { 7 } else { 0 };
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),
                Constraint::Length(snap.location.actions.len() as u16 + 2),
                Constraint::Length(enemy_height),
            ])
            .split(area);

        let location = &snap.location;
        let mut text = vec![Line::from(location.description.clone()), Line::from("")];
        if snap.can_search {
            text.push(Line::from(Span::styled(
                "Something might be hidden here.",
                Style::default().fg(Color::Yellow),
            )));
        }
        if snap.game_over {
            text.push(Line::from(Span::styled(
                "You have fallen. Press n to start again.",
                Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
            )));
        }
        let description = Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", location.name))
                    .border_style(Style::default().fg(Color::Green)),
            );
        frame.render_widget(description, parts[0]);

        let action_style = if snap.in_combat || snap.game_over {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        let actions: Vec<Line> = location
            .actions
            .iter()
            .enumerate()
            .map(|(i, a)| Line::from(Span::styled(format!("{}. {}", i + 1, a.text), action_style)))
            .collect();
        frame.render_widget(
            Paragraph::new(actions).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Paths ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
            parts[1],
        );

        if let Some(enemy) = &snap.enemy {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", enemy.name))
                .border_style(Style::default().fg(Color::Red));
            let inner = block.inner(parts[2]);
            frame.render_widget(block, parts[2]);

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(2), Constraint::Length(1)])
                .split(inner);
            frame.render_widget(
                Paragraph::new(enemy.description.clone()).wrap(Wrap { trim: true }),
                rows[0],
            );
            frame.render_widget(
                Gauge::default()
                    .gauge_style(Style::default().fg(Color::Red))
                    .label(format!("Health {}/{}", enemy.health.max(0), enemy.max_health))
                    .ratio(enemy.health_ratio()),
                rows[1],
            );
        }
    }

    fn render_log(&self, frame: &mut Frame, snap: &Snapshot, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Journal ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);

        let lines: Vec<Line> = snap
            .log
            .iter()
            .rev()
            .take(inner.height as usize)
            .rev()
            .map(|entry| {
                let color = match entry.category {
                    LogCategory::Normal => Color::White,
                    LogCategory::Location => Color::Cyan,
                    LogCategory::Combat => Color::Red,
                    LogCategory::Item => Color::Yellow,
                };
                Line::from(vec![
                    Span::styled(
                        format!("{} ", entry.time_label()),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(entry.message.clone(), Style::default().fg(color)),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_help(&self, frame: &mut Frame, snap: &Snapshot, area: Rect) {
        let help = if snap.game_over {
            "n new game  q quit"
        } else if snap.in_combat {
            "a attack  Tab select item  Enter use item  n new game  q quit"
        } else {
            "1-9 follow path  s search  r rest  Tab select item  Enter use item  n new game  q quit"
        };
        frame.render_widget(
            Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
