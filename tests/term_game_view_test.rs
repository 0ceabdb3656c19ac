use stackfall::core::GameState;
use stackfall::term::{FrameBuffer, GameView, Hud, Viewport};
use stackfall::types::{GamePhase, PieceKind};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 10 cells * 2 columns plus border => 22 wide, 20 rows plus border => 22 tall.
    let fb = view.render(&snap, Hud::default(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[19 * 10] = Some(PieceKind::I);
    snap.active = None;
    snap.ghost_row = None;

    let fb = GameView::default().render(&snap, Hud::default(), Viewport::new(22, 22));

    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_hides_buffer_rows() {
    let mut snap = GameState::new(1).snapshot();
    // Every spawn sits at least partly above row 0.
    let active = snap.active.unwrap();
    assert!(active.cells.iter().any(|&(r, _)| r < 0));
    snap.ghost_row = None;

    let fb = GameView::default().render(&snap, Hud::default(), Viewport::new(22, 22));
    let visible = active.cells.iter().filter(|&&(r, _)| r >= 0).count();
    let blocks = screen_text(&fb).chars().filter(|&c| c == '█').count();
    assert_eq!(blocks, visible * 2);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 1234;
    snap.lines = 10;
    snap.hold = Some(PieceKind::T);

    let fb = GameView::default().render(&snap, Hud { best: 5000 }, Viewport::new(60, 22));
    let all = screen_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("BEST"));
    assert!(all.contains("5000"));
    assert!(all.contains("LINES"));
    assert!(all.contains("HOLD"));
}

#[test]
fn term_view_centers_board_on_tall_viewports() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Hud::default(), Viewport::new(22, 30));

    // (30 - 22) / 2 = 4
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_shows_game_over() {
    let mut snap = GameState::new(1).snapshot();
    snap.phase = GamePhase::GameOver;
    snap.active = None;

    let fb = GameView::default().render(&snap, Hud::default(), Viewport::new(60, 24));
    assert!(screen_text(&fb).contains("GAME OVER"));
}
