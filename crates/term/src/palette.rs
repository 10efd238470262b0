//! Tile appearance: kind -> glyph and color, selection -> tint.

use crate::fb::{Rgb, Style};
use crate::types::TileKind;

/// Play-area background
pub const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

/// Background behind the selected tile
pub const SELECTED_BG: Rgb = Rgb::new(70, 70, 90);

const KINDS: [(char, Rgb); 8] = [
    ('●', Rgb::new(220, 80, 80)),
    ('▲', Rgb::new(100, 220, 120)),
    ('■', Rgb::new(80, 140, 230)),
    ('◆', Rgb::new(240, 220, 80)),
    ('★', Rgb::new(200, 120, 220)),
    ('♥', Rgb::new(255, 165, 0)),
    ('♣', Rgb::new(80, 220, 220)),
    ('♠', Rgb::new(230, 230, 230)),
];

fn entry(kind: TileKind) -> (char, Rgb) {
    KINDS[kind as usize % KINDS.len()]
}

pub fn tile_glyph(kind: TileKind) -> char {
    entry(kind).0
}

/// Normal tiles are bright; the selected tile is drawn at half brightness on
/// a lighter background.
pub fn tile_style(kind: TileKind, selected: bool) -> Style {
    let (_, color) = entry(kind);
    if selected {
        Style::new(color.shade(128), SELECTED_BG).bold()
    } else {
        Style::new(color, BOARD_BG).bold()
    }
}
