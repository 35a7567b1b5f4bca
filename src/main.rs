//! Terminal 2048 runner (default binary).
//!
//! Wires the core, input, and renderer together explicitly; the optional
//! first CLI argument is a path to a rules JSON file.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::{Game, Rules};
use tui_2048::input::{direction_for_key, is_restart, should_quit};
use tui_2048::term::{GameView, TerminalRenderer, Viewport};
use tui_2048::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

fn main() -> Result<()> {
    let rules = load_rules()?;
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1);

    let mut game = Game::new(rules, DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT, seed)?;
    game.start();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn load_rules() -> Result<Rules> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read rules file {}", path))?;
            Rules::from_json(&json)
        }
        None => Ok(Rules::classic()),
    }
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(game, Viewport::new(w, h));
        term.draw(&fb)?;

        // Turn-based: block until the next key.
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }
            if is_restart(key) {
                game.reset();
                continue;
            }
            if let Some(direction) = direction_for_key(key) {
                // A no-op move changes nothing and spawns nothing; just
                // redraw.
                let _ = game.apply_move(direction)?;
            }
        }
    }
}
