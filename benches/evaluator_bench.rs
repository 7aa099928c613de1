use criterion::{black_box, criterion_group, criterion_main, Criterion};

use holdem_ranker::domain::{Board, HoleCards};
use holdem_ranker::engine::process_line;
use holdem_ranker::eval::evaluate;
use holdem_ranker::infra::RankerConfig;

fn evaluating_single_hand(c: &mut Criterion) {
    let board: Board = "4cKs4h8s7s".parse().unwrap();
    let hole: HoleCards = "Ad4s".parse().unwrap();
    c.bench_function("evaluate a 7-card hand", |b| {
        b.iter(|| evaluate(black_box(&hole), black_box(&board)))
    });
}

fn evaluating_straight_flush_board(c: &mut Criterion) {
    let board: Board = "3c4c5c6c7c".parse().unwrap();
    let hole: HoleCards = "2c8c".parse().unwrap();
    c.bench_function("evaluate a straight flush", |b| {
        b.iter(|| evaluate(black_box(&hole), black_box(&board)))
    });
}

fn ranking_full_line(c: &mut Criterion) {
    let config = RankerConfig::default();
    let line = "4cKs4h8s7s Ad4s Ac4d As9s KhKd 5d6d";
    c.bench_function("rank a 5-hand deal line", |b| {
        b.iter(|| process_line(black_box(line), &config))
    });
}

fn ranking_wide_deal_in_parallel(c: &mut Criterion) {
    let config = RankerConfig {
        parallel_threshold: 0,
        ..RankerConfig::default()
    };
    let line = "2h3d9sTcKh AhKs 2c2d 7s8s QdJd 3s4s 5c6c 9h9c TdTh AcAd JcQc 4d5d 6h7h 8d8h";
    c.bench_function("rank a 13-hand deal in parallel", |b| {
        b.iter(|| process_line(black_box(line), &config))
    });
}

criterion_group!(
    benches,
    evaluating_single_hand,
    evaluating_straight_flush_board,
    ranking_full_line,
    ranking_wide_deal_in_parallel
);
criterion_main!(benches);
