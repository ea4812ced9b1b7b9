//! Wildwood - Entry Point
//!
//! Loads the game data, sets up the terminal, and runs the input loop.

use std::fs::File;
use std::io;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use wildwood::data::{export_default_data, DataManager, DEFAULT_DATA_DIR};
use wildwood::game::{Game, RandomDice};
use wildwood::ui::App;

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

const USAGE: &str = "Usage: wildwood [--seed N] [DATA_DIR]\n       wildwood --export-data [DATA_DIR]";

/// What the command line asked for
#[derive(Debug, PartialEq)]
enum Command {
    Play { data_dir: String, seed: Option<u64> },
    ExportData { data_dir: String },
    Help,
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut data_dir = None;
    let mut seed = None;
    let mut export = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--export-data" => export = true,
            "--seed" => {
                let value = iter.next().context("--seed needs a value")?;
                seed = Some(value.parse().with_context(|| format!("invalid seed '{}'", value))?);
            }
            other if other.starts_with('-') => bail!("unknown option '{}'\n{}", other, USAGE),
            other => {
                if data_dir.replace(other.to_string()).is_some() {
                    bail!("more than one data directory given\n{}", USAGE);
                }
            }
        }
    }

    let data_dir = data_dir.unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
    if export {
        Ok(Command::ExportData { data_dir })
    } else {
        Ok(Command::Play { data_dir, seed })
    }
}

fn main() -> Result<()> {
    init_logging();
    log::info!("Starting Wildwood v{}", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_dir, seed) = match parse_args(&args)? {
        Command::Help => {
            println!("Wildwood - a small terminal text adventure\n\n{}", USAGE);
            return Ok(());
        }
        Command::ExportData { data_dir } => {
            export_default_data(&data_dir)
                .with_context(|| format!("exporting default data to {}", data_dir))?;
            println!("Default data written to {}", data_dir);
            return Ok(());
        }
        Command::Play { data_dir, seed } => (data_dir, seed),
    };

    // Bad data fails here, before the terminal is touched
    let data = DataManager::load_from_dir(&data_dir)
        .with_context(|| format!("loading game data from {}", data_dir))?;
    let mut game = match seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            Game::with_dice(data, RandomDice::seeded(seed))
        }
        None => Game::new(data),
    }
    .context("starting session")?;
    let mut app = App::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &mut game);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Game exited with error: {:#}", e);
        eprintln!("Error: {:#}", e);
    }

    log::info!("Session ended after {} journal entries", game.log().len());
    if log::log_enabled!(log::Level::Debug) {
        match game.snapshot().to_json() {
            Ok(json) => log::debug!("Final state: {}", json),
            Err(e) => log::warn!("Could not serialize final state: {}", e),
        }
    }
    log::info!("Wildwood shut down cleanly");
    result
}

/// Log to a file so records do not interfere with the TUI
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match File::create("wildwood.log") {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            // No writable log file; keep the terminal clean
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}

/// Input loop: each key press is one atomic game action followed by a redraw
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    game: &mut Game,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame, game))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            // Only handle key press events, not releases
            if key.kind == KeyEventKind::Press && app.handle_input(key, game)? {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            parse_args(&[]).unwrap(),
            Command::Play { data_dir: DEFAULT_DATA_DIR.to_string(), seed: None }
        );
    }

    #[test]
    fn test_seed_and_dir() {
        assert_eq!(
            parse_args(&args(&["--seed", "42", "mods/data"])).unwrap(),
            Command::Play { data_dir: "mods/data".to_string(), seed: Some(42) }
        );
        assert!(parse_args(&args(&["--seed"])).is_err());
        assert!(parse_args(&args(&["--seed", "abc"])).is_err());
    }

    #[test]
    fn test_export_and_errors() {
        assert_eq!(
            parse_args(&args(&["--export-data", "out"])).unwrap(),
            Command::ExportData { data_dir: "out".to_string() }
        );
        assert_eq!(parse_args(&args(&["-h"])).unwrap(), Command::Help);
        assert!(parse_args(&args(&["--fly"])).is_err());
        assert!(parse_args(&args(&["a", "b"])).is_err());
    }
}
