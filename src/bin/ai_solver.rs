use clap::Parser;
use hiq_solver::engine::Board;
use hiq_solver::solver::{solve, SolveError};
use hiq_solver::utils::board_from_str_array;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to a board file (7x7 grid of '*' peg, 'O' hole, '.' off-board);
    /// the standard 32-peg opening is used when omitted
    board_file: Option<PathBuf>,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    if lines.len() != 7 {
        return Err(format!(
            "Expected 7 lines in board file, found {}",
            lines.len()
        ));
    }

    for (i, line) in lines.iter().enumerate() {
        if line.len() != 7 {
            return Err(format!(
                "Line {} has {} characters (expected 7)",
                i + 1,
                line.len()
            ));
        }
    }

    board_from_str_array(&lines).map_err(|e| format!("Invalid board format: {}", e))
}

fn main() {
    let args = Args::parse();

    let mut board = match &args.board_file {
        Some(path) => match read_board_file(path) {
            Ok(board) => {
                println!("Loaded board from {}\n", path.display());
                board
            }
            Err(e) => {
                eprintln!("Failed to read board from file: {}", e);
                process::exit(1);
            }
        },
        None => Board::new(),
    };

    println!("Initial board state ({} pegs):\n{}\n", board.peg_count(), board);
    println!("Searching for a solution...\n");

    match solve(&mut board) {
        Ok(solution) => {
            println!("Solution found:\n");
            println!("Moves ({}):", solution.len());
            for (i, mv) in solution.iter().enumerate() {
                println!("  Move {}: {}", i + 1, mv);
            }
            println!("\nFinal board state:\n{}\n", board);
        }
        Err(SolveError::NoSolutionFound) => {
            println!("No solution found.\n");
            process::exit(1);
        }
    }
}
