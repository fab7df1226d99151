use std::fmt;

/// Content of one board cell: a pipe shape in a fixed orientation, or nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TileKind {
    #[default]
    Empty,
    EmptyPipe,
    Vertical,
    Horizontal,
    ElbowTopLeft,
    ElbowTopRight,
    ElbowBottomLeft,
    ElbowBottomRight,
    TRight,
    TLeft,
    TTop,
    TBottom,
    Cross,
}

impl TileKind {
    pub const ALL: [TileKind; 13] = [
        TileKind::Empty,
        TileKind::EmptyPipe,
        TileKind::Vertical,
        TileKind::Horizontal,
        TileKind::ElbowTopLeft,
        TileKind::ElbowTopRight,
        TileKind::ElbowBottomLeft,
        TileKind::ElbowBottomRight,
        TileKind::TRight,
        TileKind::TLeft,
        TileKind::TTop,
        TileKind::TBottom,
        TileKind::Cross,
    ];

    /// Picker layout: four columns of three tiles. `Empty` is not offered,
    /// erasing is its own action.
    pub const PALETTE: [[TileKind; 3]; 4] = [
        [TileKind::EmptyPipe, TileKind::ElbowTopLeft, TileKind::TRight],
        [TileKind::Vertical, TileKind::ElbowTopRight, TileKind::TLeft],
        [TileKind::Horizontal, TileKind::ElbowBottomRight, TileKind::TBottom],
        [TileKind::Cross, TileKind::ElbowBottomLeft, TileKind::TTop],
    ];

    pub const fn is_empty(self) -> bool {
        matches!(self, TileKind::Empty)
    }

    pub const fn name(self) -> &'static str {
        match self {
            TileKind::Empty => "empty",
            TileKind::EmptyPipe => "empty pipe",
            TileKind::Vertical => "vertical",
            TileKind::Horizontal => "horizontal",
            TileKind::ElbowTopLeft => "elbow top-left",
            TileKind::ElbowTopRight => "elbow top-right",
            TileKind::ElbowBottomLeft => "elbow bottom-left",
            TileKind::ElbowBottomRight => "elbow bottom-right",
            TileKind::TRight => "t right",
            TileKind::TLeft => "t left",
            TileKind::TTop => "t top",
            TileKind::TBottom => "t bottom",
            TileKind::Cross => "cross",
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
