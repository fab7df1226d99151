use tracing::{debug, info, warn};

use super::{Board, BoardError, ConfigForm, FormField, TileKind, ValidationError};

/// A completed drag: the tile that was carried and the cell it landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropEvent {
    pub x: i32,
    pub y: i32,
    pub tile: TileKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Grid,
    Palette,
    Form(FormField),
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Grid => Focus::Palette,
            Focus::Palette => Focus::Form(FormField::Rows),
            Focus::Form(FormField::Rows) => Focus::Form(FormField::Columns),
            Focus::Form(FormField::Columns) => Focus::Grid,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Grid => Focus::Form(FormField::Columns),
            Focus::Palette => Focus::Grid,
            Focus::Form(FormField::Rows) => Focus::Palette,
            Focus::Form(FormField::Columns) => Focus::Form(FormField::Rows),
        }
    }
}

pub struct Editor {
    pub board: Board,
    pub cursor: (usize, usize),
    /// Selected palette slot as `(column, row)` into [`TileKind::PALETTE`].
    pub palette: (usize, usize),
    pub dragging: Option<TileKind>,
    pub form: ConfigForm,
    pub focus: Focus,
    pub status: Option<String>,
}

impl Editor {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            board: Board::empty(width, height),
            cursor: (0, 0),
            palette: (0, 0),
            dragging: None,
            form: ConfigForm::new(width, height),
            focus: Focus::Grid,
            status: None,
        }
    }

    pub fn selected_tile(&self) -> TileKind {
        let (col, row) = self.palette;
        TileKind::PALETTE[col][row]
    }

    pub fn handle_drop(&mut self, ev: DropEvent) -> Result<(), BoardError> {
        match self.board.set_cell(ev.x, ev.y, ev.tile) {
            Ok(next) => {
                debug!(x = ev.x, y = ev.y, tile = %ev.tile, "tile placed");
                self.board = next;
                self.status = None;
                Ok(())
            }
            Err(err) => {
                warn!(%err, tile = %ev.tile, "drop rejected");
                self.status = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn begin_drag(&mut self, tile: TileKind) {
        self.dragging = Some(tile);
    }

    pub fn cancel_drag(&mut self) {
        self.dragging = None;
    }

    /// Completes a drag over `(x, y)`. Without a held tile this does nothing.
    pub fn drop_at(&mut self, x: i32, y: i32) -> Result<(), BoardError> {
        match self.dragging.take() {
            Some(tile) => self.handle_drop(DropEvent { x, y, tile }),
            None => Ok(()),
        }
    }

    /// Drops the held tile at the cursor, or the selected palette tile when
    /// nothing is held.
    pub fn place_at_cursor(&mut self) -> Result<(), BoardError> {
        let tile = self.dragging.take().unwrap_or_else(|| self.selected_tile());
        let (x, y) = self.cursor;
        self.handle_drop(DropEvent {
            x: x as i32,
            y: y as i32,
            tile,
        })
    }

    pub fn erase_at_cursor(&mut self) -> Result<(), BoardError> {
        let (x, y) = self.cursor;
        self.handle_drop(DropEvent {
            x: x as i32,
            y: y as i32,
            tile: TileKind::Empty,
        })
    }

    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let (x, y) = self.cursor;
        let max_x = self.board.width().saturating_sub(1) as i32;
        let max_y = self.board.height().saturating_sub(1) as i32;
        self.cursor = (
            (x as i32 + dx).clamp(0, max_x) as usize,
            (y as i32 + dy).clamp(0, max_y) as usize,
        );
    }

    pub fn set_cursor(&mut self, x: usize, y: usize) {
        if x < self.board.width() && y < self.board.height() {
            self.cursor = (x, y);
        }
    }

    pub fn move_palette(&mut self, dcol: i32, drow: i32) {
        let cols = TileKind::PALETTE.len() as i32;
        let rows = TileKind::PALETTE[0].len() as i32;
        let (col, row) = self.palette;
        self.palette = (
            (col as i32 + dcol).clamp(0, cols - 1) as usize,
            (row as i32 + drow).clamp(0, rows - 1) as usize,
        );
    }

    /// Picks up the selected palette tile and hands focus to the grid.
    pub fn pick_selected(&mut self) {
        self.begin_drag(self.selected_tile());
        self.focus = Focus::Grid;
    }

    pub fn submit_form(&mut self) -> Result<(), ValidationError> {
        let (width, height) = self.form.validation()?;
        self.reconfigure(width, height);
        Ok(())
    }

    fn reconfigure(&mut self, width: usize, height: usize) {
        info!(
            width,
            height,
            discarded = self.board.placed_count(),
            "board reconfigured"
        );
        self.board = Board::empty(width, height);
        self.dragging = None;
        self.status = None;
        let (x, y) = self.cursor;
        self.cursor = (x.min(width - 1), y.min(height - 1));
    }
}
