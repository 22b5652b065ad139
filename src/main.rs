//! Terminal layering demo (default binary).
//!
//! Loads the tile map, stacks the terrain, obstacle, unit, shading, overlay
//! and selector layers, and scrolls the camera when the mouse nears a
//! terminal edge. Rendering uses a custom framebuffer (no widget toolkit).

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_tactics::app::{load_scene, App, Flow};
use tui_tactics::config::DemoConfig;
use tui_tactics::core::Scene;
use tui_tactics::term::{FrameBuffer, TermSize, TerminalRenderer};

fn main() -> Result<()> {
    let cfg = DemoConfig::from_env();
    init_logging(&cfg)?;

    // Map problems are fatal, and are reported before the terminal is taken over.
    let scene = load_scene(&cfg)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, scene, &cfg);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to the configured file only; the terminal belongs to the UI.
fn init_logging(cfg: &DemoConfig) -> Result<()> {
    let Some(path) = &cfg.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, scene: Scene, cfg: &DemoConfig) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut app = App::new(scene, cfg, TermSize::new(w, h));
    info!(
        cols = w,
        rows = h,
        focus_x = app.camera().focus().x,
        focus_y = app.camera().focus().y,
        "demo started"
    );

    let mut fb = FrameBuffer::new(w, h);
    let tick_duration = Duration::from_millis(app.tick_ms() as u64);
    let mut last_tick = Instant::now();

    loop {
        app.render_into(&mut fb);
        term.draw_swap(&mut fb)?;

        // Drain input until the next tick is due.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match app.handle_event(event::read()?) {
                Flow::Quit => {
                    info!("quit requested");
                    return Ok(());
                }
                Flow::Redraw => term.invalidate(),
                Flow::Continue => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick();
        }
    }
}
