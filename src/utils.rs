use crate::engine::{Board, Cell, BOARD_COLUMNS, BOARD_ROWS};

/// Parses an array of string slices into a [`Board`].
///
/// Each string slice represents a row, starting from row 0. Valid
/// characters are:
/// - `'*'`: `Cell::Occupied`
/// - `'O'`: `Cell::Empty`
/// - `'.'`: `Cell::Invalid`
///
/// Rows beyond those provided, and columns beyond the end of a row string,
/// default to `Cell::Invalid` (unspecified cells are off the board). Any
/// other character is an error. The peg count of the returned board is
/// taken from the parsed grid; its move log starts empty.
///
/// # Arguments
/// * `s`: at most `BOARD_ROWS` rows of at most `BOARD_COLUMNS` characters.
///
/// # Returns
/// * `Ok(Board)` on success.
/// * `Err(String)` if there are too many rows, a row is too long, or an
///   unrecognized character is encountered.
///
/// # Examples
/// ```
/// use hiq_solver::engine::Cell;
/// use hiq_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["*O", ".*"]).unwrap();
/// assert_eq!(board.cell(0, 0), Ok(Cell::Occupied));
/// assert_eq!(board.cell(0, 1), Ok(Cell::Empty));
/// assert_eq!(board.cell(1, 0), Ok(Cell::Invalid));
/// assert_eq!(board.peg_count(), 2);
///
/// assert!(board_from_str_array(&["*X"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, String> {
    if s.len() > BOARD_ROWS {
        return Err(format!(
            "Invalid number of rows. Expected at most {}, found {}",
            BOARD_ROWS,
            s.len()
        ));
    }

    let mut grid = [[Cell::Invalid; BOARD_COLUMNS]; BOARD_ROWS];

    for (r, row_str) in s.iter().enumerate() {
        if row_str.chars().count() > BOARD_COLUMNS {
            return Err(format!(
                "Row {} is too long. Expected at most {} characters, found {}",
                r,
                BOARD_COLUMNS,
                row_str.chars().count()
            ));
        }

        for (c, char_cell) in row_str.chars().enumerate() {
            grid[r][c] = match char_cell {
                '*' => Cell::Occupied,
                'O' => Cell::Empty,
                '.' => Cell::Invalid,
                _ => {
                    return Err(format!(
                        "Unrecognized character '{}' in row {} col {}",
                        char_cell, r, c
                    ))
                }
            };
        }
    }

    Ok(Board::from_grid(grid))
}
