use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_2048::core::{Grid, GridEngine};
use tui_2048::term::{tile_style, AnchorY, FrameBuffer, GameView, Viewport};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

fn engine_from(rows: &[[u32; 4]]) -> GridEngine {
    GridEngine::from_grid(Grid::from_rows(rows).unwrap(), StdRng::seed_from_u64(1))
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GridEngine::new(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    // 8x4 tile pitch, plus a one-cell gap, plus the border: 35x19.
    let fb = view.render(&snap, Viewport::new(35, 20));

    assert_eq!(fb.get(0, 0).unwrap().ch, '╭');
    assert_eq!(fb.get(34, 0).unwrap().ch, '╮');
    assert_eq!(fb.get(0, 18).unwrap().ch, '╰');
    assert_eq!(fb.get(34, 18).unwrap().ch, '╯');
}

#[test]
fn term_view_centers_tile_values() {
    let snap = engine_from(&[[2048, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 2]]).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(35, 20));

    // Tile (0, 0) spans x 2..9, y 2..5; its text sits on the middle row.
    let row: String = (2..9).map(|x| fb.get(x, 3).unwrap().ch).collect();
    assert_eq!(row, " 2048  ");
    assert_eq!(fb.get(2, 2).unwrap().style.bg, tile_style(2048).bg);

    // Tile (3, 3) spans x 26..33, y 14..17.
    let row: String = (26..33).map(|x| fb.get(x, 15).unwrap().ch).collect();
    assert_eq!(row, "   2   ");
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = engine_from(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    game.move_left();
    let snap = game.snapshot();

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(70, 24));
    let all = screen_text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("BEST TILE"));
    assert!(all.contains("MOVES"));

    // Too narrow for a panel.
    let fb = view.render(&snap, Viewport::new(36, 24));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_win_and_game_over_messages() {
    let view = GameView::default();

    let mut won = engine_from(&[[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);
    won.move_left();
    let fb = view.render(&won.snapshot(), Viewport::new(80, 24));
    let text = screen_text(&fb);
    assert!(text.contains("You reached 2048!"));
    assert!(!text.contains("GAME OVER"));

    let locked = engine_from(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    let fb = view.render(&locked.snapshot(), Viewport::new(80, 24));
    let text = screen_text(&fb);
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("No moves left"));
}

#[test]
fn term_view_uses_compact_tiles_in_small_terminals() {
    let snap = engine_from(&[[16, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(27, 7));

    assert_eq!(fb.get(0, 0).unwrap().ch, '╭');
    assert_eq!(fb.get(26, 5).unwrap().ch, '╯');
    assert!(screen_text(&fb).contains("16"));
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let mut game = GridEngine::new(9);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&game.snapshot(), Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));

    game.move_left();
    game.move_up();
    view.render_into(&game.snapshot(), Viewport::new(50, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (50, 30));
}
