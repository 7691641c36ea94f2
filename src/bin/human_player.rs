use hiq_solver::engine::{Board, Direction, Move};
use hiq_solver::rules;
use std::io::{self, Write};

fn parse_direction(s: &str) -> Option<Direction> {
    match s {
        "u" | "up" => Some(Direction::Up),
        "r" | "right" => Some(Direction::Right),
        "d" | "down" => Some(Direction::Down),
        "l" | "left" => Some(Direction::Left),
        _ => None,
    }
}

fn main() {
    let mut board = Board::new();
    println!("Welcome to Hi-Q!");

    loop {
        println!("---------------------");
        println!("Jumps: {}, Pegs: {}", board.moves().len(), board.peg_count());
        println!("{}", board);

        if board.peg_count() == 1 {
            println!();
            println!("---------------------");
            println!("🎉 YOU WIN! 🎉");
            println!("One peg left after {} jumps.", board.moves().len());
            println!("---------------------");
            break;
        }

        if !rules::has_legal_move(&board) {
            println!("No jumps left with {} pegs on the board. Undo or quit.", board.peg_count());
        }

        print!("Enter your move (row col direction), 'u' to undo, 'q' to quit: ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }

        let trimmed_input = input.trim();

        if trimmed_input == "q" {
            println!("Thanks for playing!");
            break;
        }

        if trimmed_input == "u" {
            match board.revert_last_move() {
                Ok(mv) => println!("Undid jump {}.", mv),
                Err(_) => println!("Cannot undo further (no jumps made)."),
            }
            continue;
        }

        let parts: Vec<&str> = trimmed_input.split_whitespace().collect();
        if parts.len() == 3 {
            let coords = (parts[0].parse::<usize>(), parts[1].parse::<usize>());
            let direction = parse_direction(parts[2]);
            if let ((Ok(row), Ok(col)), Some(direction)) = (coords, direction) {
                if rules::is_legal(&board, row, col, direction) {
                    board.apply_move(Move {
                        row,
                        col,
                        direction,
                    });
                    println!("Jump made.");
                } else {
                    println!(
                        "Illegal jump: ({}, {}) {} needs a peg there, a peg to jump, and an empty hole to land in.",
                        row, col, direction
                    );
                }
            } else {
                println!("Invalid input: use 'row col direction' (e.g. '1 3 down'), 'u', or 'q'.");
            }
        } else {
            println!("Invalid input format. Use 'row col direction', 'u', or 'q'.");
        }
    }
}
