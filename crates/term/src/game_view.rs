//! GameView: lays a [`GameSnapshot`] out into a framebuffer.
//!
//! Pure, no I/O. Buffer rows are never drawn; a piece still partly in the
//! buffer shows only its visible cells.

use crate::core::{color_of, GameSnapshot};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::PieceKind;

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Values shown beside the field that the engine does not own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hud {
    pub best: u32,
}

pub struct GameView {
    /// Terminal columns per field cell.
    cell_w: u16,
    /// Terminal rows per field cell.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Frame size (border included) for a field of the snapshot's dimensions.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (
            snap.width as u16 * self.cell_w + 2,
            snap.height as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, hud: Hud, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let (frame_w, frame_h) = self.frame_size(snap);
        let panel_w = 14;
        let origin_x = viewport.width.saturating_sub(frame_w + panel_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;
        let field = Field {
            x: origin_x + 1,
            y: origin_y + 1,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            width: snap.width,
            height: snap.height,
        };

        draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        let empty = Style::new(Rgb::new(90, 90, 100), FIELD_BG).dim();
        for row in 0..snap.height {
            for col in 0..snap.width {
                match snap.cell(row, col) {
                    Some(kind) => field.fill(fb, row as i16, col as i16, '█', block_style(kind)),
                    None => field.fill(fb, row as i16, col as i16, '·', empty),
                }
            }
        }

        if let Some(ghost) = snap.ghost_cells() {
            let style = Style::new(Rgb::new(140, 140, 140), FIELD_BG).dim();
            for (row, col) in ghost {
                field.fill(fb, row, col, '░', style);
            }
        }

        if let Some(active) = snap.active {
            for (row, col) in active.cells {
                field.fill(fb, row, col, '█', block_style(active.kind).bold());
            }
        }

        self.draw_panel(fb, snap, hud, origin_x + frame_w + 2, origin_y);

        if snap.is_game_over() {
            let text = "GAME OVER";
            let x = origin_x + frame_w.saturating_sub(text.len() as u16) / 2;
            let style = Style::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
            fb.put_str(x, origin_y + frame_h / 2, text, style);
            fb.put_str(
                origin_x + frame_w.saturating_sub(11) / 2,
                origin_y + frame_h / 2 + 1,
                "r: restart",
                Style::new(Rgb::new(200, 200, 200), SCREEN_BG),
            );
        }
    }

    /// Allocating convenience wrapper around [`render_into`](Self::render_into).
    pub fn render(&self, snap: &GameSnapshot, hud: Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, hud: Hud, x: u16, y: u16) {
        let label = Style::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = y;
        for (name, n) in [("SCORE", snap.score), ("BEST", hud.best.max(snap.score)), ("LINES", snap.lines)] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, n, value);
            y += 3;
        }

        fb.put_str(x, y, "HOLD", label);
        let hold_style = if snap.can_hold { value } else { value.dim() };
        match snap.hold {
            Some(kind) => fb.put_char(x, y + 1, kind.letter(), block_style(kind).bold()),
            None => fb.put_str(x, y + 1, "-", hold_style),
        }
        y += 3;

        fb.put_str(x, y, "NEXT", label);
        for (i, &kind) in snap.next_queue.iter().enumerate() {
            let style = if i == 0 { block_style(kind).bold() } else { block_style(kind) };
            fb.put_char(x + 2 * i as u16, y + 1, kind.letter(), style);
        }
    }
}

/// Screen placement of the playfield interior.
struct Field {
    x: u16,
    y: u16,
    cell_w: u16,
    cell_h: u16,
    width: u8,
    height: u8,
}

impl Field {
    /// Paint field cell `(row, col)`; cells outside the visible field are skipped.
    fn fill(&self, fb: &mut FrameBuffer, row: i16, col: i16, ch: char, style: Style) {
        if row < 0 || col < 0 || row >= self.height as i16 || col >= self.width as i16 {
            return;
        }
        fb.fill_rect(
            self.x + col as u16 * self.cell_w,
            self.y + row as u16 * self.cell_h,
            self.cell_w,
            self.cell_h,
            ch,
            style,
        );
    }
}

fn block_style(kind: PieceKind) -> Style {
    Style::new(color_of(kind).rgb().into(), FIELD_BG)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    fn screen_text(fb: &FrameBuffer) -> String {
        (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
    }

    #[test]
    fn frame_matches_field_dimensions() {
        let snap = GameState::new(1).snapshot();
        assert_eq!(GameView::default().frame_size(&snap), (22, 22));
    }

    #[test]
    fn panel_shows_score_and_best() {
        let snap = GameState::new(1).snapshot();
        let fb = GameView::default().render(&snap, Hud { best: 4321 }, Viewport::new(60, 24));
        let text = screen_text(&fb);
        assert!(text.contains("SCORE"));
        assert!(text.contains("4321"));
        assert!(text.contains("NEXT"));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn game_over_overlay() {
        let mut state = GameState::new(3);
        while !state.is_game_over() {
            state.hard_drop();
        }
        let fb = GameView::default().render(&state.snapshot(), Hud::default(), Viewport::new(60, 24));
        assert!(screen_text(&fb).contains("GAME OVER"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = GameState::new(1).snapshot();
        let fb = GameView::default().render(&snap, Hud::default(), Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }
}
