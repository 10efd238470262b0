//! Terminal match-3 runner (default binary).
//!
//! Drives the swap controller from crossterm keyboard/mouse events and a fixed
//! tick, drawing through the framebuffer renderer.
//!
//! Usage: `tui-match3 [seed]`. Set `TUI_MATCH3_LOG=<path>` to write debug logs
//! to a file; the terminal itself belongs to the renderer.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use tracing::info;

use tui_match3::core::{ClearMatches, Grid, SimpleRng, SwapController, SwapResolution};
use tui_match3::input::{handle_key_event, should_quit, Cursor};
use tui_match3::term::{BoardView, FrameBuffer, Hud, TerminalRenderer, Viewport};
use tui_match3::types::{BoardAction, BoardConfig, Coord, TICK_MS};

fn main() -> Result<()> {
    init_logging()?;
    let seed = parse_seed()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("TUI_MATCH3_LOG") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot open log file {}", path.to_string_lossy()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

fn parse_seed() -> Result<u32> {
    match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("seed must be a non-negative integer, got {arg:?}")),
        None => Ok(SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(1)),
    }
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let config = BoardConfig::default();
    let mut rng = SimpleRng::new(seed);
    info!(seed, width = config.width, height = config.height, "new board");

    let grid = Grid::initialize(&config, &mut rng)?;
    let mut controller = SwapController::new(grid, config.swap_duration_ms);
    let mut cursor = Cursor::new(config.width, config.height);
    let mut clear = ClearMatches::new();

    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let hud = Hud {
            cursor: Some(cursor.coord()),
            cleared: clear.cleared(),
        };
        view.render_into(&controller.snapshot(), &hud, viewport, &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(BoardAction::Cursor(dir)) => {
                            cursor.step(dir);
                        }
                        Some(BoardAction::Select) if !controller.is_animating() => {
                            controller.select(cursor.coord())?;
                        }
                        Some(BoardAction::Restart) if !controller.is_animating() => {
                            info!(state = rng.state(), "restart");
                            if controller.reset(Grid::initialize(&config, &mut rng)?) {
                                clear = ClearMatches::new();
                            }
                        }
                        _ => {}
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let (w, h) = (config.width, config.height);
                    if let Some(coord) = view.hit_test(w, h, viewport, mouse.column, mouse.row) {
                        select_at(&mut controller, &mut cursor, coord)?;
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if let Some(SwapResolution::Accepted { matches, .. }) =
                controller.tick_with(TICK_MS, &mut clear)?
            {
                info!(cleared = matches.len(), total = clear.cleared(), "matches cleared");
            }
        }
    }
}

fn select_at(controller: &mut SwapController, cursor: &mut Cursor, coord: Coord) -> Result<()> {
    cursor.place(coord);
    if controller.is_animating() {
        return Ok(());
    }
    controller.select(coord)?;
    Ok(())
}
