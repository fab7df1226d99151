//! Property tests for the board model and dimension validation.
//!
//! 1. A fresh board is empty everywhere and nothing outside it is addressable.
//! 2. `set_cell` changes exactly one cell and leaves its input alone.
//! 3. Placing the same tile twice equals placing it once.
//! 4. Out-of-range coordinates are rejected for every board size.
//! 5. Dimension validation accepts exactly `[3, 10]`.
//! 6. Reconfiguring yields an empty board whatever came before.

use pipe_editor::{
    validate_dimensions, Board, BoardError, TileKind, ValidationError, LOWER_BOUND, UPPER_BOUND,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn dims() -> impl Strategy<Value = (usize, usize)> {
    (LOWER_BOUND..=UPPER_BOUND, LOWER_BOUND..=UPPER_BOUND)
}

fn tile() -> impl Strategy<Value = TileKind> {
    proptest::sample::select(TileKind::ALL.to_vec())
}

/// A board with some random placements, plus an in-range coordinate.
fn board_and_cell() -> impl Strategy<Value = (Board, i32, i32)> {
    dims().prop_flat_map(|(w, h)| {
        let placements = proptest::collection::vec((0..w as i32, 0..h as i32, tile()), 0..20);
        (placements, 0..w as i32, 0..h as i32).prop_map(move |(placements, x, y)| {
            let board = placements
                .into_iter()
                .fold(Board::empty(w, h), |b, (px, py, t)| b.set_cell(px, py, t).unwrap());
            (board, x, y)
        })
    })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Fresh boards are empty
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fresh_board_is_empty((w, h) in dims()) {
        let board = Board::empty(w, h);
        prop_assert_eq!(board.cells().count(), w * h);
        for x in 0..w as i32 {
            for y in 0..h as i32 {
                prop_assert_eq!(board.get(x, y), Some(TileKind::Empty));
            }
        }
        prop_assert_eq!(board.get(w as i32, 0), None);
        prop_assert_eq!(board.get(0, h as i32), None);
        prop_assert_eq!(board.get(-1, -1), None);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Single-cell update isolation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn set_cell_changes_only_target((board, x, y) in board_and_cell(), t in tile()) {
        let snapshot = board.clone();
        let next = board.set_cell(x, y, t).unwrap();

        prop_assert_eq!(&board, &snapshot);
        prop_assert_eq!(next.width(), board.width());
        prop_assert_eq!(next.height(), board.height());
        for (((cx, cy), after), (_, before)) in next.cells().zip(board.cells()) {
            if (cx as i32, cy as i32) == (x, y) {
                prop_assert_eq!(after, t);
            } else {
                prop_assert_eq!(after, before, "cell ({}, {}) changed", cx, cy);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Idempotent placement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn repeated_placement_is_idempotent((board, x, y) in board_and_cell(), t in tile()) {
        let once = board.set_cell(x, y, t).unwrap();
        let twice = once.set_cell(x, y, t).unwrap();
        prop_assert_eq!(once, twice);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Out-of-bounds rejection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn out_of_range_is_rejected(
        (w, h) in dims(),
        x in -50i32..50,
        y in -50i32..50,
        t in tile(),
    ) {
        let board = Board::empty(w, h);
        let inside = x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h;
        let result = board.set_cell(x, y, t);
        if inside {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result, Err(BoardError::OutOfBounds { x, y, width: w, height: h }));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Dimension validation
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn validation_boundaries() {
    assert_eq!(validate_dimensions("3", "10"), Ok((3, 10)));
    assert!(matches!(validate_dimensions("2", "5"), Err(ValidationError::OutOfRange { .. })));
    assert!(matches!(validate_dimensions("11", "5"), Err(ValidationError::OutOfRange { .. })));
    assert!(matches!(validate_dimensions("abc", "5"), Err(ValidationError::NotInteger { .. })));
}

proptest! {
    #[test]
    fn validation_accepts_exactly_the_bounds(w in -100i64..100, h in -100i64..100) {
        let result = validate_dimensions(&w.to_string(), &h.to_string());
        let in_range = |v: i64| (LOWER_BOUND as i64..=UPPER_BOUND as i64).contains(&v);
        if in_range(w) && in_range(h) {
            prop_assert_eq!(result, Ok((w as usize, h as usize)));
        } else {
            let is_out_of_range = matches!(result, Err(ValidationError::OutOfRange { .. }));
            prop_assert!(is_out_of_range);
        }
    }

    #[test]
    fn non_numeric_input_is_not_an_integer(raw in "[a-z ]{0,6}[a-z][a-z0-9 ]{0,6}") {
        let result = validate_dimensions(&raw, "5");
        let is_not_integer = matches!(result, Err(ValidationError::NotInteger { .. }));
        prop_assert!(is_not_integer);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Reconfiguration resets state
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reconfigure_discards_previous_contents(
        (board, x, y) in board_and_cell(),
        (w, h) in dims(),
    ) {
        let populated = board.set_cell(x, y, TileKind::Cross).unwrap();
        prop_assert!(populated.placed_count() > 0);

        let (w, h) = validate_dimensions(&w.to_string(), &h.to_string()).unwrap();
        let fresh = Board::empty(w, h);
        prop_assert_eq!(fresh.placed_count(), 0);
        prop_assert!(fresh.cells().all(|(_, t)| t == TileKind::Empty));
    }
}
