// Board bounds and editor UI constants.
pub const LOWER_BOUND: usize = 3;
pub const UPPER_BOUND: usize = 10;
pub const INITIAL_GRID_WIDTH: usize = 5;
pub const INITIAL_GRID_HEIGHT: usize = 5;
pub const CELL_W: usize = 5; // glyph block width of one tile
pub const CELL_H: usize = 3;
pub const SIDEBAR_W: u16 = 34;
pub const PALETTE_H: u16 = 15; // 3 tile rows with gaps, plus borders
pub const FORM_H: u16 = 6;
pub const STATUS_H: u16 = 10;
pub const LOG_ENV: &str = "PIPE_EDITOR_LOG";
