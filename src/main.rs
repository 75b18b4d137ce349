//! Terminal runner (default binary).
//!
//! Polls keys between ticks, feeds them to the session, ticks it at a fixed
//! cadence and draws every snapshot through the framebuffer renderer. Once
//! the game is over the final screen stays up until a key is pressed.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use brick_tetris::core::GameSession;
use brick_tetris::input::{map_key_event, InputEvent};
use brick_tetris::store::FileHighScore;
use brick_tetris::term::{FrameBuffer, GameView, TerminalRenderer};
use brick_tetris::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file when one is configured; the terminal is busy with the game.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(anyhow::Error::msg)
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let store = FileHighScore::new(&config.highscore_path);
    let mut session = match config.seed {
        Some(seed) => GameSession::with_seed(seed, store),
        None => GameSession::new(store),
    };
    info!(
        seed = session.seed(),
        high_score = session.high_score(),
        tick_ms = config.tick_ms,
        "session ready"
    );

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let tick = config.tick_duration();
    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until next tick.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(InputEvent { action, hold }) = map_key_event(key) {
                        session.handle_input(action, hold);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() < tick {
            continue;
        }
        last_tick = Instant::now();

        let info = session.tick();
        let viewport = term.viewport()?;
        view.render_into(info, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        if info.status.is_terminal() {
            break;
        }
    }

    info!(score = session.score(), "game over");
    wait_for_key()?;
    session.shutdown();
    Ok(())
}

fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
