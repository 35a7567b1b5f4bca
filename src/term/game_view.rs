//! GameView: maps `core::Game` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Game;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Pos, TileValue};

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

/// A lightweight terminal view for the 2048 board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Wide cells fit a 4-digit value and compensate for glyph aspect ratio.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game into a framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Default::default());

        let board = game.board();
        let board_px_w = board.width() as u16 * self.cell_w;
        let board_px_h = board.height() as u16 * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let empty = CellStyle::new(Rgb::new(120, 110, 100), Rgb::new(45, 42, 38));
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', empty);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..board.height() as i8 {
            for x in 0..board.width() as i8 {
                match board.get(Pos::new(x, y)) {
                    Some(Some(value)) => {
                        self.draw_tile(&mut fb, start_x, start_y, x as u16, y as u16, value)
                    }
                    _ => self.draw_empty(&mut fb, start_x, start_y, x as u16, y as u16, empty),
                }
            }
        }

        // Title and key help above/below the frame.
        let label = CellStyle::new(Rgb::new(180, 180, 180), Rgb::new(0, 0, 0));
        fb.put_str(start_x, start_y.saturating_sub(1), "2048", label.bold());
        fb.put_str(
            start_x,
            start_y + frame_h,
            "arrows/wasd move  r restart  q quit",
            label,
        );

        if game.no_moves_available() {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "NO MOVES");
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }

    fn draw_empty(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        style: CellStyle,
    ) {
        let px = origin_x + 1 + x * self.cell_w;
        let py = origin_y + 1 + y * self.cell_h;
        fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, '·', style);
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        value: TileValue,
    ) {
        let px = origin_x + 1 + x * self.cell_w;
        let py = origin_y + 1 + y * self.cell_h;
        let style = tile_style(value);

        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let text = value.to_string();
        let text_x = px + (self.cell_w.saturating_sub(text.len() as u16)) / 2;
        let text_y = py + self.cell_h / 2;
        fb.put_str(text_x, text_y, &text, style.bold());
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        text: &str,
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(120, 30, 30)).bold();
        let tx = x + w.saturating_sub(text.len() as u16) / 2;
        let ty = y + h / 2;
        fb.fill_rect(
            tx.saturating_sub(1),
            ty,
            text.len() as u16 + 2,
            1,
            ' ',
            style,
        );
        fb.put_str(tx, ty, text, style);
    }
}

/// Per-power tile palette, roughly the classic 2048 ramp.
fn tile_style(value: TileValue) -> CellStyle {
    const RAMP: [(Rgb, Rgb); 11] = [
        (Rgb::new(110, 100, 90), Rgb::new(238, 228, 218)), // 2
        (Rgb::new(110, 100, 90), Rgb::new(237, 224, 200)), // 4
        (Rgb::new(250, 245, 240), Rgb::new(242, 177, 121)), // 8
        (Rgb::new(250, 245, 240), Rgb::new(245, 149, 99)), // 16
        (Rgb::new(250, 245, 240), Rgb::new(246, 124, 95)), // 32
        (Rgb::new(250, 245, 240), Rgb::new(246, 94, 59)),  // 64
        (Rgb::new(250, 245, 240), Rgb::new(237, 207, 114)), // 128
        (Rgb::new(250, 245, 240), Rgb::new(237, 204, 97)), // 256
        (Rgb::new(250, 245, 240), Rgb::new(237, 200, 80)), // 512
        (Rgb::new(250, 245, 240), Rgb::new(237, 197, 63)), // 1024
        (Rgb::new(250, 245, 240), Rgb::new(237, 194, 46)), // 2048
    ];

    let power = value.get().max(1).ilog2() as usize;
    // Values past the ramp share the darkest slot.
    let (fg, bg) = RAMP[power.saturating_sub(1).min(RAMP.len() - 1)];
    CellStyle::new(fg, bg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;

    fn rendered(width: u16, height: u16) -> FrameBuffer {
        let mut game = Game::new(Rules::classic(), 4, 4, 1).unwrap();
        game.start();
        GameView::default().render(&game, Viewport::new(width, height))
    }

    fn frame_text(fb: &FrameBuffer) -> String {
        let mut out = String::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                out.push(fb.get(x, y).unwrap_or_default().ch);
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_render_contains_spawned_values() {
        let fb = rendered(80, 24);
        let text = frame_text(&fb);
        // Two seeded tiles, values from the classic spawn policy.
        assert!(text.contains('2') || text.contains('4'));
        assert!(text.contains('┌') && text.contains('┘'));
    }

    #[test]
    fn test_render_survives_tiny_viewport() {
        // Clipping must hold even when the frame does not fit.
        let fb = rendered(10, 5);
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.height(), 5);
    }

    #[test]
    fn test_tile_style_ramp_is_total() {
        for power in 1..=20 {
            let _ = tile_style(TileValue::new(1u32 << power));
        }
        let _ = tile_style(TileValue::new(3)); // non-power values still render
    }
}
