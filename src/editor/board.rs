use super::TileKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}

/// Grid of tiles. Updates return a new board and leave `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<TileKind>,
}

impl Board {
    /// Every cell starts `Empty`. Callers are expected to have checked the
    /// dimensions with [`validate_dimensions`](super::validate_dimensions).
    pub fn empty(width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0, "board dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![TileKind::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (xu, yu) = (x as usize, y as usize);
        if xu >= self.width || yu >= self.height {
            return None;
        }
        Some(yu * self.width + xu)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<TileKind> {
        self.idx(x, y).map(|idx| self.cells[idx])
    }

    pub fn set_cell(&self, x: i32, y: i32, tile: TileKind) -> Result<Board, BoardError> {
        let idx = self.idx(x, y).ok_or(BoardError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        let mut next = self.clone();
        next.cells[idx] = tile;
        Ok(next)
    }

    /// Row-major walk over `((x, y), tile)`.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), TileKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, tile)| ((i % self.width, i / self.width), *tile))
    }

    pub fn placed_count(&self) -> usize {
        self.cells.iter().filter(|t| !t.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_every_cell_empty() {
        let board = Board::empty(4, 7);
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 7);
        assert_eq!(board.cells().count(), 28);
        assert!(board.cells().all(|(_, t)| t == TileKind::Empty));
        assert_eq!(board.placed_count(), 0);
    }

    #[test]
    fn cells_are_row_major() {
        let board = Board::empty(3, 4)
            .set_cell(2, 1, TileKind::Cross)
            .unwrap();
        let coords: Vec<(usize, usize)> = board.cells().map(|(c, _)| c).take(4).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1)]);
        let (pos, _) = board.cells().find(|(_, t)| *t == TileKind::Cross).unwrap();
        assert_eq!(pos, (2, 1));
    }

    #[test]
    fn set_cell_leaves_input_unchanged() {
        let before = Board::empty(5, 5);
        let after = before.set_cell(1, 3, TileKind::ElbowTopLeft).unwrap();
        assert_eq!(before.get(1, 3), Some(TileKind::Empty));
        assert_eq!(after.get(1, 3), Some(TileKind::ElbowTopLeft));
        assert_eq!(after.placed_count(), 1);
    }

    #[test]
    fn placing_empty_erases() {
        let board = Board::empty(3, 3)
            .set_cell(0, 0, TileKind::Vertical)
            .and_then(|b| b.set_cell(0, 0, TileKind::Empty))
            .unwrap();
        assert_eq!(board, Board::empty(3, 3));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected_not_clamped() {
        let board = Board::empty(3, 5);
        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 5), (3, 5), (i32::MAX, 0)] {
            assert_eq!(
                board.set_cell(x, y, TileKind::Cross),
                Err(BoardError::OutOfBounds {
                    x,
                    y,
                    width: 3,
                    height: 5
                })
            );
            assert_eq!(board.get(x, y), None);
        }
    }

    #[test]
    fn out_of_bounds_message_names_cell_and_extent() {
        let err = Board::empty(4, 3).set_cell(9, 1, TileKind::TTop).unwrap_err();
        assert_eq!(err.to_string(), "cell (9, 1) is outside the 4x3 board");
    }
}
