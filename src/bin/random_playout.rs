use std::env;

use rand::prelude::*;
use rand::rngs::StdRng;

use chess_rules::{Game, GameStatus};

const DEFAULT_MAX_PLIES: usize = 200;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        eprintln!("usage: random_playout [seed] [max_plies]");
        return;
    }

    let seed = match args.get(1).map(|s| s.parse::<u64>()) {
        None => 0,
        Some(Ok(seed)) => seed,
        Some(Err(err)) => {
            eprintln!("invalid seed: {err}");
            return;
        }
    };
    let max_plies = match args.get(2).map(|s| s.parse::<usize>()) {
        None => DEFAULT_MAX_PLIES,
        Some(Ok(n)) => n,
        Some(Err(err)) => {
            eprintln!("invalid max_plies: {err}");
            return;
        }
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new();
    let mut plies = 0;
    while plies < max_plies && !game.status().is_terminal() {
        let moves = game.all_legal_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        if let Err(err) = game.make_move(mv) {
            eprintln!("{err}");
            return;
        }
        plies += 1;
    }

    println!("{}", game.board());
    println!("seed: {seed}");
    println!("plies: {plies}");
    println!("side_to_move: {}", game.team_turn());
    let status = match game.status() {
        GameStatus::Ongoing => "ongoing",
        GameStatus::Check => "check",
        GameStatus::Checkmate => "checkmate",
        GameStatus::Stalemate => "stalemate",
    };
    println!("status: {status}");
    println!("legal_moves: {}", game.all_legal_moves().len());
}
