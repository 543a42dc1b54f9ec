use tui_connect_four::core::{GameState, MatchConfig};
use tui_connect_four::term::{FrameBuffer, GameView, Viewport};
use tui_connect_four::types::{Phase, Seat, DEFAULT_PLAYER_ONE_COLOR};

fn default_game() -> GameState {
    GameState::new(MatchConfig::default()).unwrap()
}

fn small_game() -> GameState {
    GameState::new(MatchConfig {
        width: 4,
        height: 4,
        ..Default::default()
    })
    .unwrap()
}

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width())
        .map(|x| fb.get(x, y).unwrap().ch)
        .collect()
}

#[test]
fn view_renders_border_corners() {
    let snap = default_game().snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1 on a 7x6 board:
    // board pixels = 14x6, frame = 16x8, plus one header row => 16x9.
    let fb = view.render(&snap, Viewport::new(16, 9));

    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(15, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 8).unwrap().ch, '└');
    assert_eq!(fb.get(15, 8).unwrap().ch, '┘');
}

#[test]
fn view_renders_a_dropped_disc_in_the_player_color() {
    let mut game = default_game();
    game.play_column(3).unwrap();

    let view = GameView::default();
    let fb = view.render(&game.snapshot(), Viewport::new(16, 9));

    // Inside the border, cell (3, 5): glyph in the left half, fill right.
    let x0 = 1 + 3 * 2;
    let y0 = 2 + 5;
    let cell = fb.get(x0, y0).unwrap();
    assert_eq!(cell.ch, '●');
    assert_eq!(cell.style.fg, DEFAULT_PLAYER_ONE_COLOR);
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, ' ');
}

#[test]
fn view_marks_empty_cells_with_grid_dots() {
    let snap = default_game().snapshot();
    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(16, 9));

    assert_eq!(fb.get(1, 2).unwrap().ch, '·');
    assert!(fb.get(1, 2).unwrap().style.dim);
}

#[test]
fn header_shows_digits_and_the_hover_marker() {
    let game = default_game();
    let view = GameView::default();
    let fb = view.render_with_cursor(&game.snapshot(), Some(3), Viewport::new(16, 9));

    assert_eq!(fb.get(1, 0).unwrap().ch, '1');
    let marker = fb.get(7, 0).unwrap();
    assert_eq!(marker.ch, '▼');
    assert!(marker.style.bold);
    assert_eq!(marker.style.fg, DEFAULT_PLAYER_ONE_COLOR);
}

#[test]
fn header_dims_full_columns() {
    let mut game = default_game();
    for _ in 0..3 {
        game.play_column(0).unwrap();
        game.play_column(0).unwrap();
    }
    let snap = game.snapshot();
    assert!(!snap.is_column_playable(0));

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(16, 9));
    assert_eq!(fb.get(1, 0).unwrap().ch, '1');
    assert!(fb.get(1, 0).unwrap().style.dim);
    assert!(!fb.get(3, 0).unwrap().style.dim);
}

#[test]
fn header_drops_the_marker_once_the_match_ends() {
    let mut game = small_game();
    for column in [0, 0, 1, 1, 2, 2, 3] {
        game.play_column(column).unwrap();
    }
    assert!(game.is_game_over());

    let view = GameView::default();
    // 4x4 board: frame = 10x6 plus header => viewport 30x7 centers at x=10.
    let fb = view.render_with_cursor(&game.snapshot(), Some(2), Viewport::new(30, 7));
    assert_eq!(fb.get(10 + 1 + 2 * 2, 0).unwrap().ch, '3');
}

#[test]
fn win_overlay_names_the_winning_seat() {
    let mut game = small_game();
    for column in [0, 0, 1, 1, 2, 2, 3] {
        game.play_column(column).unwrap();
    }
    assert_eq!(game.phase(), Phase::Won(Seat::First));

    let view = GameView::default();
    let fb = view.render(&game.snapshot(), Viewport::new(30, 7));
    assert!(row_text(&fb, 4).contains("PLAYER 1 WINS"));
}

#[test]
fn win_highlights_the_run_and_dims_the_rest() {
    let mut game = default_game();
    for column in [0, 6, 0, 6, 0, 6, 0] {
        game.play_column(column).unwrap();
    }
    assert_eq!(game.phase(), Phase::Won(Seat::First));

    let view = GameView::default();
    let fb = view.render(&game.snapshot(), Viewport::new(16, 9));

    // Winning run fills column 0, rows 2-5: bold, not dim. Row 3 sits
    // under the centered overlay text, so check the rows around it.
    for row in [2u16, 4, 5] {
        let cell = fb.get(1, 2 + row).unwrap();
        assert_eq!(cell.ch, '●');
        assert!(cell.style.bold);
        assert!(!cell.style.dim);
    }

    // An opponent disc elsewhere is dimmed.
    let filler = fb.get(1 + 6 * 2, 2 + 5).unwrap();
    assert_eq!(filler.ch, '●');
    assert!(filler.style.dim);
}

#[test]
fn tie_overlay_reports_a_tied_game() {
    let mut game = small_game();
    for column in [0, 2, 1, 3, 2, 0, 3, 1, 0, 2, 1, 3, 2, 0, 3, 1] {
        game.play_column(column).unwrap();
    }
    assert_eq!(game.phase(), Phase::Tied);

    let view = GameView::default();
    let fb = view.render(&game.snapshot(), Viewport::new(30, 7));
    assert!(row_text(&fb, 4).contains("TIE GAME"));
}

#[test]
fn side_panel_appears_when_the_viewport_is_wide_enough() {
    let mut game = default_game();
    game.play_column(3).unwrap();

    let view = GameView::default();
    // 7x6 board: frame 16x8; viewport 44 wide centers at x=14, leaving a
    // 12-column panel at x=32.
    let fb = view.render(&game.snapshot(), Viewport::new(44, 9));

    assert!(row_text(&fb, 1).contains("GAME"));
    let text: String = (0..9).map(|y| row_text(&fb, y)).collect::<Vec<_>>().join("\n");
    assert!(text.contains("TURN"));
    assert!(text.contains("Player 2"));
    assert!(text.contains("MOVES"));
    assert!(text.contains("KEYS"));
}

#[test]
fn tiny_viewports_render_without_panicking() {
    let snap = default_game().snapshot();
    let view = GameView::default();
    for (w, h) in [(0, 0), (1, 1), (5, 3), (10, 2)] {
        let _ = view.render(&snap, Viewport::new(w, h));
    }
}
