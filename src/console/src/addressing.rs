//! Offset arithmetic for the text grid.
//!
//! An offset is a byte index into the video buffer. Every cell takes two
//! bytes (glyph, attribute) and rows are stored one after another, so the
//! cell at `(col, row)` starts at `2 * (row * COLS + col)`.

/// Number of columns in VGA text mode.
pub const COLS: usize = 80;

/// Number of rows in VGA text mode.
pub const ROWS: usize = 25;

/// Bytes per cell.
pub const CELL_BYTES: usize = 2;

/// Bytes per row.
pub const ROW_BYTES: usize = CELL_BYTES * COLS;

/// Size of the whole buffer in bytes.
pub const BUFFER_SIZE: usize = ROW_BYTES * ROWS;

/// Byte offset of the cell at `(col, row)`.
#[inline]
pub const fn offset(col: usize, row: usize) -> usize {
    CELL_BYTES * (row * COLS + col)
}

/// Returns true if `(col, row)` names a cell of the grid.
#[inline]
pub const fn in_grid(col: usize, row: usize) -> bool {
    col < COLS && row < ROWS
}

/// Like [`offset`], but saturates instead of overflowing.
///
/// Used to report coordinates that are off the grid, which may be
/// arbitrarily large.
#[inline]
pub const fn saturating_offset(col: usize, row: usize) -> usize {
    CELL_BYTES.saturating_mul(row.saturating_mul(COLS).saturating_add(col))
}

/// Row containing `offset`.
#[inline]
pub const fn row(offset: usize) -> usize {
    offset / ROW_BYTES
}

/// Column containing `offset`.
#[inline]
pub const fn col(offset: usize) -> usize {
    (offset - ROW_BYTES * row(offset)) / CELL_BYTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_roundtrip_whole_grid() {
        for r in 0..ROWS {
            for c in 0..COLS {
                let o = offset(c, r);
                assert_eq!(col(o), c);
                assert_eq!(row(o), r);
                assert_eq!(o % CELL_BYTES, 0);
                assert!(o < BUFFER_SIZE);
            }
        }
    }

    #[test]
    fn test_known_offsets() {
        assert_eq!(offset(0, 0), 0);
        assert_eq!(offset(1, 0), 2);
        assert_eq!(offset(0, 1), 160);
        assert_eq!(offset(COLS - 1, ROWS - 1), BUFFER_SIZE - 2);
    }

    #[test]
    fn test_saturating_offset() {
        assert_eq!(saturating_offset(COLS, 5), offset(COLS, 5));
        assert_eq!(saturating_offset(usize::MAX, 0), usize::MAX);
        assert_eq!(saturating_offset(0, usize::MAX), usize::MAX);
        assert!(!in_grid(COLS, 0));
        assert!(!in_grid(0, ROWS));
        assert!(in_grid(COLS - 1, ROWS - 1));
    }

    #[test]
    fn test_one_past_last_column_is_next_row() {
        assert_eq!(offset(COLS, 3), offset(0, 4));
    }
}
