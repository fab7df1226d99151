use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

use crate::editor::{Board, FormField, TileKind};
use crate::{CELL_H, CELL_W, FORM_H, PALETTE_H, SIDEBAR_W, STATUS_H};

pub const BUTTON_LABEL: &str = "[ Update ]";

/// Canvas size for `cols x rows` tiles with a one-character separator
/// around every tile.
pub fn canvas_size(cols: usize, rows: usize) -> (u16, u16) {
    (
        (cols * (CELL_W + 1) + 1) as u16,
        (rows * (CELL_H + 1) + 1) as u16,
    )
}

/// Smallest terminal that shows `board` without clipping.
pub fn required_size(board: &Board) -> (u16, u16) {
    let (grid_w, grid_h) = canvas_size(board.width(), board.height());
    let sidebar_h = PALETTE_H + FORM_H + STATUS_H;
    (grid_w + 4 + SIDEBAR_W + 2, grid_h.max(sidebar_h) + 2)
}

/// Screen placement of every editor panel. Drawing and mouse hit testing both
/// go through this so a drop always lands on the cell that was drawn there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorLayout {
    pub area: Rect,
    pub grid: Rect,
    pub palette: Rect,
    pub palette_canvas: Rect,
    pub form: Rect,
    pub button: Rect,
    pub status: Rect,
    pub too_small: bool,
    cols: usize,
    rows: usize,
}

impl EditorLayout {
    pub fn compute(area: Rect, board: &Board) -> Self {
        let (need_w, need_h) = required_size(board);
        let too_small = area.width < need_w || area.height < need_h;

        let cabinet = Block::default().borders(Borders::ALL).inner(area);
        let (grid_w, grid_h) = canvas_size(board.width(), board.height());

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(grid_w + 4), Constraint::Length(SIDEBAR_W)])
            .split(cabinet);

        // Center the grid canvas within the left column.
        let v_center = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(grid_h),
                Constraint::Min(0),
            ])
            .split(cols[0]);
        let grid = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(grid_w),
                Constraint::Min(0),
            ])
            .split(v_center[1])[1];

        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(PALETTE_H),
                Constraint::Length(FORM_H),
                Constraint::Length(STATUS_H),
                Constraint::Min(0),
            ])
            .split(cols[1]);

        let palette = sidebar[0];
        let palette_inner = Block::default().borders(Borders::ALL).inner(palette);
        let (pal_w, pal_h) = canvas_size(TileKind::PALETTE.len(), TileKind::PALETTE[0].len());
        let palette_canvas = Rect {
            x: palette_inner.x + palette_inner.width.saturating_sub(pal_w) / 2,
            y: palette_inner.y,
            width: pal_w.min(palette_inner.width),
            height: pal_h.min(palette_inner.height),
        };

        let form = sidebar[1];
        let form_inner = Block::default().borders(Borders::ALL).inner(form);
        let button = Rect {
            x: form_inner.x,
            y: form_inner.y + 2,
            width: (BUTTON_LABEL.len() as u16).min(form_inner.width),
            height: 1,
        };

        Self {
            area,
            grid,
            palette,
            palette_canvas,
            form,
            button,
            status: sidebar[2],
            too_small,
            cols: board.width(),
            rows: board.height(),
        }
    }

    /// Screen rectangle of the glyph block for board cell `(x, y)`.
    pub fn cell_rect(&self, x: usize, y: usize) -> Rect {
        slot_rect(self.grid, x, y)
    }

    pub fn palette_rect(&self, col: usize, row: usize) -> Rect {
        slot_rect(self.palette_canvas, col, row)
    }

    /// Board cell under a terminal position. Separators and anything outside
    /// the grid map to `None`.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        if self.too_small {
            return None;
        }
        let x = slot_at(self.grid.x, column, self.cols, CELL_W)?;
        let y = slot_at(self.grid.y, row, self.rows, CELL_H)?;
        Some((x, y))
    }

    /// Palette slot `(column, row)` under a terminal position.
    pub fn palette_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        if self.too_small {
            return None;
        }
        let col = slot_at(self.palette_canvas.x, column, TileKind::PALETTE.len(), CELL_W)?;
        let r = slot_at(self.palette_canvas.y, row, TileKind::PALETTE[0].len(), CELL_H)?;
        Some((col, r))
    }

    pub fn field_at(&self, column: u16, row: u16) -> Option<FormField> {
        let inner = Block::default().borders(Borders::ALL).inner(self.form);
        if self.too_small || !contains(inner, column, row) {
            return None;
        }
        match row - inner.y {
            0 => Some(FormField::Rows),
            1 => Some(FormField::Columns),
            _ => None,
        }
    }

    pub fn on_button(&self, column: u16, row: u16) -> bool {
        !self.too_small && contains(self.button, column, row)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

fn slot_rect(canvas: Rect, col: usize, row: usize) -> Rect {
    Rect {
        x: canvas.x + 1 + (col * (CELL_W + 1)) as u16,
        y: canvas.y + 1 + (row * (CELL_H + 1)) as u16,
        width: CELL_W as u16,
        height: CELL_H as u16,
    }
}

fn slot_at(origin: u16, pos: u16, count: usize, size: usize) -> Option<usize> {
    let offset = pos.checked_sub(origin)?.checked_sub(1)? as usize;
    let (idx, within) = (offset / (size + 1), offset % (size + 1));
    (within < size && idx < count).then_some(idx)
}
