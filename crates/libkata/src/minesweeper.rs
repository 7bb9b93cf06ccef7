//! Minesweeper mine-adjacency counting.
//!
//! Takes a 2D grid of 0/1 markers and produces a same-shaped grid where each
//! mine cell is replaced by a marker and each remaining cell by the number of
//! mines among its up-to-eight neighbours. Rows may have differing lengths:
//! column bounds are checked against each neighbour row's own length, so
//! jagged boards are handled without index errors.

use serde_json::Value;

/// Marker used in the output grid for cells that are themselves mines.
pub const MINE_MARKER: u8 = 9;

const MINE: u8 = 1;

/// Offsets (row, column) for the eight adjacent cells.
const NEIGHBOUR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Counts neighbouring mines for each cell of a JSON board.
///
/// The board must be an array of rows, each row an array of cells, where a
/// cell equal to 1 is a mine. Mines become [`MINE_MARKER`] in the output and
/// every other cell the count of adjacent mines. Any value that is not
/// board-shaped yields an empty grid: a non-array input, or a single
/// non-array row, aborts the whole computation rather than skipping the row.
/// Callers cannot distinguish that from a legitimately empty board; both
/// return the empty grid.
pub fn count_neighbouring_mines(board: &Value) -> Vec<Vec<u8>> {
    match parse_board(board) {
        Some(rows) => annotate(&rows),
        None => Vec::new(),
    }
}

/// Annotates a board in place of its cells: mines become [`MINE_MARKER`],
/// everything else the count of neighbouring mines. The output has the same
/// row structure as the input.
pub fn annotate(board: &[Vec<u8>]) -> Vec<Vec<u8>> {
    board
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &cell)| {
                    if cell == MINE {
                        MINE_MARKER
                    } else {
                        mines_around(board, row, col)
                    }
                })
                .collect()
        })
        .collect()
}

/// Reads a board out of a JSON value. Cells other than the number 1 are kept
/// as non-mines without further validation.
fn parse_board(board: &Value) -> Option<Vec<Vec<u8>>> {
    let rows = board.as_array()?;
    let mut parsed = Vec::with_capacity(rows.len());
    for row in rows {
        let cells = row.as_array()?;
        parsed.push(cells.iter().map(|cell| u8::from(is_mine(cell))).collect());
    }
    Some(parsed)
}

fn is_mine(cell: &Value) -> bool {
    cell.as_f64() == Some(1.0)
}

/// Counts the mines among the up-to-eight neighbours of (row, col).
fn mines_around(board: &[Vec<u8>], row: usize, col: usize) -> u8 {
    let mut count = 0;
    for (delta_row, delta_col) in NEIGHBOUR_OFFSETS {
        let r = row as i64 + delta_row;
        let c = col as i64 + delta_col;
        if r < 0 || r >= board.len() as i64 {
            continue;
        }
        // Column bounds come from the neighbour row itself, not from a global
        // column count, so jagged boards work.
        let neighbour_row = &board[r as usize];
        if c < 0 || c >= neighbour_row.len() as i64 {
            continue;
        }
        if neighbour_row[c as usize] == MINE {
            count += 1;
        }
    }
    count
}
