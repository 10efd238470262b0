//! BoardView: maps a `core::BoardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Board `y` grows upward while terminal rows grow downward, so row 0 of the
//! board is drawn at the bottom of the frame.

use crate::core::{BoardSnapshot, TileSnapshot};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::palette::{tile_glyph, tile_style, BOARD_BG};
use crate::types::{Coord, Vec2};

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

/// Runner-side state drawn next to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    pub cursor: Option<Coord>,
    pub cleared: usize,
}

/// Outer border rectangle in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrameRect {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 3x1: glyph in the middle, room for cursor brackets on both sides.
        Self {
            cell_w: 3,
            cell_h: 1,
        }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn frame(&self, width: usize, height: usize, viewport: Viewport) -> FrameRect {
        let w = (width as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (height as u16).saturating_mul(self.cell_h).saturating_add(2);
        // Two lines below the frame for status and help.
        FrameRect {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h + 2) / 2,
            w,
            h,
        }
    }

    /// Top-left terminal cell of a board position given in grid units.
    fn cell_origin(&self, frame: FrameRect, board_h: usize, pos: Vec2) -> Option<(u16, u16)> {
        let col = (pos.x * self.cell_w as f32).round();
        let row = ((board_h as f32 - 1.0 - pos.y) * self.cell_h as f32).round();
        if col < 0.0 || row < 0.0 {
            return None;
        }
        Some((frame.x + 1 + col as u16, frame.y + 1 + row as u16))
    }

    /// Render the snapshot into an existing framebuffer.
    pub fn render_into(
        &self,
        snap: &BoardSnapshot,
        hud: &Hud,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));
        if snap.width == 0 || snap.height == 0 {
            return;
        }

        let frame = self.frame(snap.width, snap.height, viewport);
        let slot = Style::new(Rgb::new(90, 90, 100), BOARD_BG);

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            Style::new(BOARD_BG, BOARD_BG).glyph(' '),
        );
        self.draw_border(fb, frame, Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)));

        for tile in &snap.tiles {
            self.draw_at(fb, frame, snap.height, Vec2::from(tile.coord), '·', slot);
        }

        // Resting tiles first so tiles in flight are drawn on top.
        let (moving, resting): (Vec<&TileSnapshot>, Vec<&TileSnapshot>) = snap
            .tiles
            .iter()
            .filter(|t| !t.destroyed)
            .partition(|t| is_moving(t));
        for tile in resting.into_iter().chain(moving) {
            let style = tile_style(tile.kind, tile.selected);
            self.draw_at(fb, frame, snap.height, tile.position, tile_glyph(tile.kind), style);
        }

        if let Some(cursor) = hud.cursor {
            self.draw_cursor(fb, frame, snap.height, cursor);
        }

        let status = if snap.animating {
            "swapping..."
        } else if snap.selected.is_some() {
            "pick a neighbor to swap"
        } else {
            "select a tile"
        };
        let line = format!("{}  cleared: {}", status, hud.cleared);
        let text = Style::default();
        fb.put_str(frame.x, frame.y + frame.h, &line, text);
        fb.put_str(
            frame.x,
            frame.y + frame.h + 1,
            "arrows move  space select  r restart  q quit",
            Style::new(Rgb::new(140, 140, 140), Rgb::new(0, 0, 0)),
        );
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, hud: &Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    /// Board coordinate under terminal cell `(col, row)`, if any.
    pub fn hit_test(
        &self,
        width: usize,
        height: usize,
        viewport: Viewport,
        col: u16,
        row: u16,
    ) -> Option<Coord> {
        let frame = self.frame(width, height, viewport);
        let dx = col.checked_sub(frame.x + 1)?;
        let dy = row.checked_sub(frame.y + 1)?;
        let x = (dx / self.cell_w) as usize;
        let from_top = (dy / self.cell_h) as usize;
        if x >= width || from_top >= height {
            return None;
        }
        Some(Coord::new(x, height - 1 - from_top))
    }

    fn draw_at(
        &self,
        fb: &mut FrameBuffer,
        frame: FrameRect,
        board_h: usize,
        pos: Vec2,
        ch: char,
        style: Style,
    ) {
        let Some((px, py)) = self.cell_origin(frame, board_h, pos) else {
            return;
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, style.glyph(' '));
        fb.set(px + self.cell_w / 2, py + self.cell_h / 2, style.glyph(ch));
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, frame: FrameRect, board_h: usize, cursor: Coord) {
        let Some((px, py)) = self.cell_origin(frame, board_h, Vec2::from(cursor)) else {
            return;
        };
        let row = py + self.cell_h / 2;
        let right = px + self.cell_w - 1;
        for (x, ch) in [(px, '['), (right, ']')] {
            let bg = fb.get(x, row).map(|g| g.style.bg).unwrap_or(BOARD_BG);
            fb.set(x, row, Style::new(Rgb::new(255, 255, 255), bg).bold().glyph(ch));
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: FrameRect, style: Style) {
        let FrameRect { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

        fb.set(x, y, style.glyph('┌'));
        fb.set(x + w - 1, y, style.glyph('┐'));
        fb.set(x, y + h - 1, style.glyph('└'));
        fb.set(x + w - 1, y + h - 1, style.glyph('┘'));
        for dx in 1..w - 1 {
            fb.set(x + dx, y, style.glyph('─'));
            fb.set(x + dx, y + h - 1, style.glyph('─'));
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, style.glyph('│'));
            fb.set(x + w - 1, y + dy, style.glyph('│'));
        }
    }
}

fn is_moving(tile: &TileSnapshot) -> bool {
    let rest = Vec2::from(tile.coord);
    (tile.position.x - rest.x).abs() > 1e-3 || (tile.position.y - rest.y).abs() > 1e-3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grid, SwapController};
    use crate::types::BoardConfig;

    fn controller() -> SwapController {
        // 3x2, bottom row first: 0 1 2 / 3 4 0
        let cfg = BoardConfig::default().with_size(3, 2).with_type_count(5);
        let grid = Grid::from_kinds(&cfg, &[0, 1, 2, 3, 4, 0]).unwrap();
        SwapController::new(grid, 100)
    }

    #[test]
    fn test_bottom_row_is_drawn_last() {
        let snap = controller().snapshot();
        let view = BoardView::default();
        let fb = view.render(&snap, &Hud::default(), Viewport::new(11, 6));

        // Frame is 11x4 at (0, 0); inner rows are 1 (board y=1) and 2 (board y=0).
        assert_eq!(fb.row_text(0), "┌─────────┐");
        assert_eq!(
            fb.row_text(1),
            format!("│ {}  {}  {} │", tile_glyph(3), tile_glyph(4), tile_glyph(0))
        );
        assert_eq!(
            fb.row_text(2),
            format!("│ {}  {}  {} │", tile_glyph(0), tile_glyph(1), tile_glyph(2))
        );
        assert_eq!(fb.row_text(3), "└─────────┘");
    }

    #[test]
    fn test_hit_test_inverts_layout() {
        let view = BoardView::default();
        let vp = Viewport::new(11, 6);
        assert_eq!(view.hit_test(3, 2, vp, 1, 2), Some(Coord::new(0, 0)));
        assert_eq!(view.hit_test(3, 2, vp, 3, 2), Some(Coord::new(0, 0)));
        assert_eq!(view.hit_test(3, 2, vp, 4, 1), Some(Coord::new(1, 1)));
        assert_eq!(view.hit_test(3, 2, vp, 9, 1), Some(Coord::new(2, 1)));
        // Border and outside.
        assert_eq!(view.hit_test(3, 2, vp, 0, 1), None);
        assert_eq!(view.hit_test(3, 2, vp, 10, 1), None);
        assert_eq!(view.hit_test(3, 2, vp, 4, 3), None);
    }

    #[test]
    fn test_cursor_brackets() {
        let snap = controller().snapshot();
        let hud = Hud {
            cursor: Some(Coord::new(1, 0)),
            cleared: 0,
        };
        let fb = BoardView::default().render(&snap, &hud, Viewport::new(11, 6));
        assert_eq!(
            fb.row_text(2),
            format!("│ {} [{}] {} │", tile_glyph(0), tile_glyph(1), tile_glyph(2))
        );
    }

    #[test]
    fn test_destroyed_tiles_show_empty_slot() {
        let cfg = BoardConfig::default().with_size(3, 1).with_type_count(2);
        let mut grid = Grid::from_kinds(&cfg, &[1, 0, 1]).unwrap();
        let middle = grid.id_at(Coord::new(1, 0)).unwrap();
        grid.mark_destroyed(middle).unwrap();
        let snap = SwapController::new(grid, 100).snapshot();

        let fb = BoardView::default().render(&snap, &Hud::default(), Viewport::new(11, 5));
        assert_eq!(
            fb.row_text(1),
            format!("│ {}  ·  {} │", tile_glyph(1), tile_glyph(1))
        );
    }
}
