//! Benchmarks for move generation and check detection.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{Board, Color};

const POSITIONS: [(&str, &str); 3] = [
    ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
    (
        "middlegame",
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R",
    ),
    ("back_rank_mate", "R6k/6pp/8/8/8/8/8/6K1"),
];

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");

    for (name, placement) in POSITIONS {
        let board = Board::from_placement(placement);
        group.bench_with_input(BenchmarkId::new("white", name), &board, |b, board| {
            b.iter(|| {
                board
                    .pieces_of(Color::White)
                    .map(|p| black_box(board.legal_moves(p)).len())
                    .sum::<usize>()
            })
        });
    }

    group.finish();
}

fn bench_check_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("check");

    for (name, placement) in POSITIONS {
        let board = Board::from_placement(placement);
        group.bench_with_input(BenchmarkId::new("is_in_check", name), &board, |b, board| {
            b.iter(|| black_box(board.is_in_check(Color::Black)))
        });
        group.bench_with_input(BenchmarkId::new("is_game_over", name), &board, |b, board| {
            b.iter(|| black_box(board.is_game_over()))
        });
    }

    group.finish();
}

fn bench_duplicate(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("duplicate/startpos", |b| {
        b.iter(|| black_box(board.duplicate()))
    });
}

criterion_group!(
    benches,
    bench_legal_moves,
    bench_check_detection,
    bench_duplicate
);
criterion_main!(benches);
