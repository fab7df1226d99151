pub mod app;
mod config;
pub mod editor;
pub mod ui;

pub use config::{
    CELL_H, CELL_W, FORM_H, INITIAL_GRID_HEIGHT, INITIAL_GRID_WIDTH, LOG_ENV, LOWER_BOUND,
    PALETTE_H, SIDEBAR_W, STATUS_H, UPPER_BOUND,
};
pub use editor::{
    validate_dimensions, Board, BoardError, DropEvent, Editor, TileKind, ValidationError,
};
