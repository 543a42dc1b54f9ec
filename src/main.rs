//! Terminal Connect Four runner (default binary).
//!
//! Wires the input adapter, the game engine, and the renderer together:
//! blocks on key events, feeds chosen columns to the engine, and redraws
//! after every event. Turn-based play needs no tick loop.

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_connect_four::core::{GameState, MatchConfig};
use tui_connect_four::input::{handle_key_event, should_quit, ColumnCursor};
use tui_connect_four::term::{GameView, TerminalRenderer, Viewport};
use tui_connect_four::types::{GameAction, Rgb};

const USAGE: &str = "\
tui-connect-four - two-player Connect Four for the terminal

USAGE:
    tui-connect-four [OPTIONS]

OPTIONS:
    --width <N>        Board columns, 1-32 (default 7)
    --height <N>       Board rows, 1-32 (default 6)
    --player1 <COLOR>  First player's disc color (default #FFDD00)
    --player2 <COLOR>  Second player's disc color (default #0057B7)
    -h, --help         Print this help

COLOR accepts #RRGGBB, bare RRGGBB, or a basic name such as red, yellow,
blue, green, orange, magenta, cyan, white.";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = parse_args(&args)?;
    // Validate before touching the terminal so errors print normally.
    let game = GameState::new(config).map_err(|err| anyhow!("invalid configuration: {}", err))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    let mut cursor = ColumnCursor::new(game.config().width);
    let view = GameView::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render_with_cursor(
            &game.snapshot(),
            Some(cursor.column()),
            Viewport::new(w, h),
        );
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if should_quit(key) {
                    return Ok(());
                }
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                match action {
                    GameAction::Restart => {
                        game.restart();
                        cursor.reset();
                    }
                    action => {
                        if let Some(column) = cursor.apply(action) {
                            // Full-column and post-game drops are rejected
                            // inside the engine with no state change; the
                            // next frame simply shows the unchanged match.
                            let _ = game.play_column(column);
                        }
                    }
                }
            }
            Event::Resize(..) => {
                // Next iteration re-renders at the new size.
            }
            _ => {}
        }
    }
}

fn parse_args(args: &[String]) -> Result<MatchConfig> {
    let mut config = MatchConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --width"))?;
                config.width = v
                    .parse::<u8>()
                    .map_err(|_| anyhow!("invalid --width value: {}", v))?;
            }
            "--height" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --height"))?;
                config.height = v
                    .parse::<u8>()
                    .map_err(|_| anyhow!("invalid --height value: {}", v))?;
            }
            "--player1" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --player1"))?;
                config.players[0].color = parse_color(v)?;
            }
            "--player2" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --player2"))?;
                config.players[1].color = parse_color(v)?;
            }
            other => {
                return Err(anyhow!("unknown argument: {} (try --help)", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

fn parse_color(value: &str) -> Result<Rgb> {
    Rgb::from_str(value)
        .ok_or_else(|| anyhow!("invalid color: {} (use #RRGGBB or a basic color name)", value))
}
