use std::env;
use std::process::ExitCode;

use minimax_chess::board::{select_move, GameState, GameStatus, Move, DEFAULT_DEPTH};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut state = GameState::new();
    for notation in &args {
        let mv: Move = match notation.parse() {
            Ok(mv) => mv,
            Err(err) => {
                eprintln!("{notation}: {err}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(err) = state.apply_move(mv.from, mv.to) {
            eprintln!("{notation}: {err}");
            return ExitCode::FAILURE;
        }
    }

    let side = state.side_to_move();
    let legal_moves = state.legal_moves(side);
    let status = state.terminal_status();

    println!("fen: {}", state.to_fen());
    println!("side_to_move: {side}");
    println!(
        "status: {}",
        match status {
            GameStatus::Ongoing { in_check: false } => "ongoing",
            GameStatus::Ongoing { in_check: true } => "check",
            GameStatus::Checkmate { .. } => "checkmate",
            GameStatus::Stalemate => "stalemate",
        }
    );
    let message = state.status_message();
    if !message.is_empty() {
        println!("message: {message}");
    }
    println!("evaluation: {}", state.evaluate());
    println!("legal_moves: {}", legal_moves.len());
    for mv in &legal_moves {
        println!("{mv}");
    }
    match select_move(&mut state, side, DEFAULT_DEPTH) {
        Some(mv) => println!("suggested: {mv}"),
        None => println!("suggested: none"),
    }
    ExitCode::SUCCESS
}
