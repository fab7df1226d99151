use crate::editor::TileKind;
use crate::CELL_H;

/// Glyph block for one tile, `CELL_H` rows of `CELL_W` characters.
pub fn tile_art(tile: TileKind) -> [&'static str; CELL_H] {
    match tile {
        TileKind::Empty => ["     ", "  ·  ", "     "],
        TileKind::EmptyPipe => [" ╭─╮ ", " │ │ ", " ╰─╯ "],
        TileKind::Vertical => ["  ┃  ", "  ┃  ", "  ┃  "],
        TileKind::Horizontal => ["     ", "━━━━━", "     "],
        TileKind::ElbowTopLeft => ["  ┃  ", "━━┛  ", "     "],
        TileKind::ElbowTopRight => ["  ┃  ", "  ┗━━", "     "],
        TileKind::ElbowBottomLeft => ["     ", "━━┓  ", "  ┃  "],
        TileKind::ElbowBottomRight => ["     ", "  ┏━━", "  ┃  "],
        TileKind::TRight => ["  ┃  ", "  ┣━━", "  ┃  "],
        TileKind::TLeft => ["  ┃  ", "━━┫  ", "  ┃  "],
        TileKind::TTop => ["  ┃  ", "━━┻━━", "     "],
        TileKind::TBottom => ["     ", "━━┳━━", "  ┃  "],
        TileKind::Cross => ["  ┃  ", "━━╋━━", "  ┃  "],
    }
}
