//! Benchmarks for rules queries.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::BoardBuilder;
use chess_rules::perft::perft;
use chess_rules::rules::{is_in_checkmate, legal_moves_for};
use chess_rules::{Board, Color, Game, Move, PieceType, Position};

fn pos(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

/// Italian-style opening after four moves each, castling rights ignored.
fn middlegame() -> Board {
    BoardBuilder::starting_position()
        .clear(pos(2, 5))
        .piece(pos(4, 5), Color::White, PieceType::Pawn)
        .clear(pos(1, 7))
        .piece(pos(3, 6), Color::White, PieceType::Knight)
        .clear(pos(1, 6))
        .piece(pos(4, 3), Color::White, PieceType::Bishop)
        .clear(pos(7, 5))
        .piece(pos(5, 5), Color::Black, PieceType::Pawn)
        .clear(pos(8, 2))
        .piece(pos(6, 3), Color::Black, PieceType::Knight)
        .clear(pos(8, 7))
        .piece(pos(6, 6), Color::Black, PieceType::Knight)
        .build()
}

fn fools_mate() -> Game {
    let mut game = Game::new();
    for (from, to) in [((2, 6), (3, 6)), ((7, 5), (5, 5)), ((2, 7), (4, 7)), ((8, 4), (4, 8))] {
        if game.make_move(Move::quiet(pos(from.0, from.1), pos(to.0, to.1))).is_err() {
            panic!("fool's mate line rejected");
        }
    }
    game
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    let board = Board::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| perft(&board, Color::White, black_box(depth)))
        });
    }
    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(legal_moves_for(&startpos, Color::White)))
    });

    let middle = middlegame();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(legal_moves_for(&middle, Color::White)))
    });

    let game = Game::new();
    group.bench_function("game_all_legal_moves", |b| {
        b.iter(|| black_box(game.all_legal_moves()))
    });

    group.finish();
}

fn bench_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("status");

    let mated = fools_mate();
    group.bench_function("checkmate_detection", |b| {
        b.iter(|| black_box(is_in_checkmate(mated.board(), Color::White)))
    });

    let middle = Game::with_board(middlegame(), Color::White);
    group.bench_function("middlegame_status", |b| {
        b.iter(|| black_box(middle.status()))
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_status);
criterion_main!(benches);
