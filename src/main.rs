use std::time::{Duration, Instant};

use clap::Parser;
use wrapsnake::config::{
    theme_by_name, Theme, GRID, INPUT_POLL_INTERVAL_MS, THEMES, TICK_INTERVAL_MS,
};
use wrapsnake::error::AppError;
use wrapsnake::game::{GameState, GameStatus};
use wrapsnake::input::{self, GameInput};
use wrapsnake::renderer;
use wrapsnake::terminal_runtime::{install_panic_hook, TerminalSession};
use wrapsnake::ui::hud::HudInfo;

/// Retro terminal Snake on a wrap-around grid.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed the session RNG for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme to play with.
    #[arg(long, default_value = "classic")]
    theme: String,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let theme = resolve_theme(&cli.theme)?;

    install_panic_hook();
    run(&cli, theme)
}

fn run(cli: &Cli, theme: &'static Theme) -> Result<(), AppError> {
    let mut session = TerminalSession::enter()?;

    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(GRID, seed),
        None => GameState::new(GRID),
    };
    state.status = GameStatus::Paused;

    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let poll_interval = Duration::from_millis(INPUT_POLL_INTERVAL_MS);
    let mut last_tick = Instant::now();
    let mut best_len = state.snake.len();

    loop {
        let info = HudInfo { theme, best_len };
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, &info))?;

        if let Some(game_input) = input::poll_input(poll_interval)? {
            if matches!(game_input, GameInput::Quit) {
                break;
            }

            handle_input(&mut state, game_input);
        }

        if state.status == GameStatus::Playing && last_tick.elapsed() >= tick_interval {
            let _ = state.tick();
            best_len = best_len.max(state.snake.len());
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn handle_input(state: &mut GameState, input: GameInput) {
    match input {
        GameInput::Confirm if state.status == GameStatus::Paused => {
            state.status = GameStatus::Playing;
        }
        other => state.apply_input(other),
    }
}

fn resolve_theme(name: &str) -> Result<&'static Theme, AppError> {
    theme_by_name(name).ok_or_else(|| AppError::UnknownTheme {
        name: name.to_owned(),
        available: THEMES
            .iter()
            .map(|theme| theme.name)
            .collect::<Vec<_>>()
            .join(", "),
    })
}
