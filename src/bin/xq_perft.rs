use std::env;
use std::process;

use xiangqi_engine::board::Board;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        eprintln!("usage: xq_perft [depth] [fen]");
        return;
    }

    let depth = match args.get(1).map(|arg| arg.parse::<usize>()) {
        None => 1,
        Some(Ok(depth)) => depth,
        Some(Err(err)) => {
            eprintln!("invalid depth '{}': {err}", args[1]);
            process::exit(2);
        }
    };

    let board = if args.len() > 2 {
        let fen = args[2..].join(" ");
        match Board::try_from_fen(&fen) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("{err}");
                process::exit(2);
            }
        }
    } else {
        Board::new()
    };

    print!("{board}");
    let moves = board.all_pseudo_legal_moves();
    println!("pseudo_legal_moves: {}", moves.len());
    for mv in &moves {
        let mut child = board.clone();
        child.push(*mv);
        let nodes = if depth == 0 { 1 } else { child.perft(depth - 1) };
        println!("{mv}: {nodes}");
    }
    println!("perft({depth}) = {}", board.perft(depth));
}
