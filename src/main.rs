//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer. Moves are
//! discrete: the loop blocks on the next key event, applies it, and redraws.

use std::fs::File;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_2048::config::{parse_args, GameConfig, USAGE};
use tui_2048::core::{GameSnapshot, GridEngine};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::GameAction;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_args(&args)? else {
        println!("{}", USAGE);
        return Ok(());
    };
    init_logging(&config)?;

    let seed = config.resolve_seed();
    let mut game = GridEngine::with_size(config.size, seed)?;
    info!("new {0}x{0} game, seed {1}", config.size, seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    if result.is_ok() {
        println!(
            "Final score: {} (best tile {}, {} moves, seed {})",
            game.score(),
            game.max_tile(),
            game.moves(),
            seed
        );
    }
    result
}

/// Route `log` output to the configured file; the terminal belongs to the game.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut GridEngine) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut announced_win = false;

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Block until the next input.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }

                match handle_key_event(key) {
                    Some(GameAction::Move(direction)) => {
                        // A locked grid ignores moves until a restart.
                        if !snap.playable() {
                            continue;
                        }
                        if !game.apply_move(direction) {
                            continue;
                        }
                        if !announced_win && game.has_won() {
                            announced_win = true;
                            info!("won: score {} after {} moves", game.score(), game.moves());
                        }
                        if game.is_game_over() {
                            info!(
                                "game over: score {}, best tile {}",
                                game.score(),
                                game.max_tile()
                            );
                        }
                    }
                    Some(action @ GameAction::Restart) => {
                        game.apply_action(action);
                        announced_win = false;
                        info!("restart");
                    }
                    None => {}
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
