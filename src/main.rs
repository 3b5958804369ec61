//! Blockfall terminal runner (default binary).
//!
//! Fixed-rate loop: render the current snapshot, drain key events until the
//! next tick is due, then advance the engine by exactly one tick with the
//! sampled input. Uses crossterm for input and a framebuffer renderer.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use blockfall::config::Config;
use blockfall::core::{rng::seed_from_clock, GameState};
use blockfall::input::{map_front_command, FrontCommand, KeySampler};
use blockfall::term::{render_frame, renderer_for, FrameBuffer, Terminal, Viewport};

/// Seconds the game-over banner stays up before a new game starts
const GAME_OVER_HOLD_SECS: u32 = 3;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_logging(config.log_file.as_deref())?;

    let mut term = Terminal::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always restore the terminal before reporting anything.
    let restored = term.exit();
    result.and(restored)
}

/// Install a file subscriber when a log file is given; the terminal itself is
/// owned by the game
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))
}

fn run(term: &mut Terminal, config: &Config) -> Result<()> {
    let seed = config.seed.unwrap_or_else(seed_from_clock);
    let mut state = GameState::with_das(config.level, seed, config.das());
    info!(
        level = config.level,
        seed,
        display = %config.display,
        tick_rate = config.tick_rate,
        "starting game"
    );

    let renderer = renderer_for(config.display);
    let mut sampler = KeySampler::with_release_timeout(config.key_release_timeout());
    let mut fb = FrameBuffer::new(0, 0);

    let tick = config.tick_duration();
    let game_over_hold = GAME_OVER_HOLD_SECS * config.tick_rate;
    let mut game_over_ticks = 0;
    let mut next_tick = Instant::now() + tick;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        render_frame(renderer.as_ref(), &state.describe(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next tick is due.
        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release {
                        match map_front_command(key) {
                            Some(FrontCommand::Quit) => {
                                info!(score = state.score(), "quit");
                                return Ok(());
                            }
                            Some(FrontCommand::Restart) => {
                                state = state.restart();
                                sampler.reset();
                                game_over_ticks = 0;
                                continue;
                            }
                            Some(FrontCommand::DebugDump) => {
                                dump_state(&state);
                                continue;
                            }
                            None => {}
                        }
                    }
                    sampler.handle_event(&key, Instant::now());
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let now = Instant::now();
        let input = sampler.sample(now);
        if state.is_game_over() {
            game_over_ticks += 1;
            if game_over_ticks >= game_over_hold {
                state = state.restart();
                sampler.reset();
                game_over_ticks = 0;
            }
        } else {
            let report = state.advance(&input);
            if report.deposited.is_some() {
                debug!(?report, "tick");
            }
        }

        next_tick += tick;
        if next_tick < now {
            // Fell behind (e.g. suspended); resync instead of bursting.
            next_tick = now + tick;
        }
    }
}

fn dump_state(state: &GameState) {
    let snapshot = state.describe();
    info!("state dump\n{}", snapshot.debug_dump());
    match serde_json::to_string(&snapshot) {
        Ok(json) => info!(target: "blockfall::dump", "{json}"),
        Err(e) => debug!("snapshot serialization failed: {e}"),
    }
}
