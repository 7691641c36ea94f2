//! Jump rules for the peg board.
//!
//! Pure queries over a [`Board`]: deriving the jumped-over and landing
//! coordinates of a move and deciding whether the move is legal. Nothing in
//! this module mutates a board or holds search state.

use crate::engine::{Board, Cell, Direction, BOARD_COLUMNS, BOARD_ROWS};

/// Returns the jumped-over and landing coordinates for a jump from
/// `(row, col)` along `direction`, as `(jump, target)`.
///
/// Pure offset arithmetic, no bounds checking; coordinates are signed so
/// that jumps off the board edge are representable. Callers check the
/// target against the grid before indexing with either result.
///
/// # Examples
/// ```
/// use hiq_solver::engine::Direction;
/// use hiq_solver::rules::jump_and_target;
///
/// assert_eq!(jump_and_target(3, 3, Direction::Up), ((2, 3), (1, 3)));
/// assert_eq!(jump_and_target(0, 0, Direction::Left), ((0, -1), (0, -2)));
/// ```
pub fn jump_and_target(
    row: usize,
    col: usize,
    direction: Direction,
) -> ((isize, isize), (isize, isize)) {
    let (row, col) = (row as isize, col as isize);
    match direction {
        Direction::Up => ((row - 1, col), (row - 2, col)),
        Direction::Right => ((row, col + 1), (row, col + 2)),
        Direction::Down => ((row + 1, col), (row + 2, col)),
        Direction::Left => ((row, col - 1), (row, col - 2)),
    }
}

fn in_bounds(coords: (isize, isize)) -> bool {
    coords.0 >= 0
        && coords.0 < BOARD_ROWS as isize
        && coords.1 >= 0
        && coords.1 < BOARD_COLUMNS as isize
}

/// Checks whether the peg at `(row, col)` may jump along `direction`.
///
/// A jump is legal when the landing cell is an empty hole on the grid, the
/// origin holds a peg, and the jumped-over cell holds a peg. Anything off
/// the grid or off the cross makes the move illegal; the function never
/// fails and never mutates the board.
pub fn is_legal(board: &Board, row: usize, col: usize, direction: Direction) -> bool {
    let (jump, target) = jump_and_target(row, col, direction);

    // Landing-cell bounds come first so the lookups below never index off
    // the grid. With the target on the grid, the jumped-over cell (which
    // lies between origin and target) is non-negative as well.
    if !in_bounds(target) {
        return false;
    }

    // Peg to move
    if board.cell(row, col) != Ok(Cell::Occupied) {
        return false;
    }

    // Peg to jump over
    if board.cell(jump.0 as usize, jump.1 as usize) != Ok(Cell::Occupied) {
        return false;
    }

    // Open hole to land in
    board.cell(target.0 as usize, target.1 as usize) == Ok(Cell::Empty)
}

/// Reports whether any peg anywhere on the board has a legal jump.
pub fn has_legal_move(board: &Board) -> bool {
    for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLUMNS {
            for direction in Direction::ALL {
                if is_legal(board, row, col, direction) {
                    return true;
                }
            }
        }
    }
    false
}
