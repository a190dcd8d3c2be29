//! Snake Evolution terminal runner (default binary).
//!
//! Owns the fixed-rate driver loop: crossterm input is decoded into intents,
//! the session advances one tick every `TICK_MS`, and the framebuffer view is
//! diffed onto the terminal.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use snake_evolution::config::GameConfig;
use snake_evolution::core::{Flow, Session, SessionSnapshot};
use snake_evolution::input::{map_key, should_quit, HeldDirections, KeyContext};
use snake_evolution::term::{FrameBuffer, SessionView, TerminalRenderer, Translations, Viewport};
use snake_evolution::types::{Intent, TICK_MS};

fn init_tracing(config: &GameConfig) -> Result<()> {
    // Stdout belongs to the renderer; without a log file there is no sink.
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    info!(path = %path.display(), seed = config.seed, "logging initialized");
    Ok(())
}

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_tracing(&config)?;
    let translations = Translations::embedded()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &translations);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, text: &Translations) -> Result<()> {
    let mut session = Session::with_rules(config.seed, config.rules());
    session.set_language(config.language);

    let view = SessionView::default();
    let mut held = HeldDirections::new();
    let mut snapshot = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut intents: Vec<Intent> = Vec::with_capacity(16);

    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, text, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            info!("quit via ctrl-c");
                            return Ok(());
                        }
                        let context = KeyContext::for_mode(session.mode_tag());
                        // Arcade steering is re-emitted every tick while held.
                        let steering = context == KeyContext::Arcade
                            && held.handle_key_press(key.code).is_some();
                        if !steering {
                            if let Some(intent) = map_key(key, context) {
                                intents.push(intent);
                            }
                        }
                    }
                    KeyEventKind::Release => held.handle_key_release(key.code),
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if KeyContext::for_mode(session.mode_tag()) == KeyContext::Arcade {
                intents.extend(held.update(TICK_MS));
            } else {
                held.reset();
            }

            let flow = session.step(TICK_MS, &intents);
            intents.clear();
            if flow == Flow::Quit {
                info!(
                    score = session.progression().score(),
                    level = session.progression().level(),
                    "session ended"
                );
                return Ok(());
            }
        }
    }
}
