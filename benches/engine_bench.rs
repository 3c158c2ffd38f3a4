use criterion::{black_box, criterion_group, criterion_main, Criterion};

use samaritan::board::Player;
use samaritan::eval::evaluate;
use samaritan::movegen::successors;
use samaritan::protocol::tfen::parse_tfen;
use samaritan::search::{select_move, DEFAULT_DEPTH};

/// A drop-phase position with 6 pieces down.
const DROP_TFEN: &str = "b.r../.br../..b../....r/.....";

/// A dense move-phase position: all 8 pieces clustered mid-board.
const MOVE_TFEN: &str = "...../.br../.rbr./.bb../....r";

fn bench_evaluate(c: &mut Criterion) {
    let board = parse_tfen(MOVE_TFEN).unwrap();
    c.bench_function("evaluate_move_phase", |b| {
        b.iter(|| evaluate(black_box(&board), black_box(Player::Black)))
    });
}

fn bench_successors(c: &mut Criterion) {
    let drop = parse_tfen(DROP_TFEN).unwrap();
    let mv = parse_tfen(MOVE_TFEN).unwrap();
    c.bench_function("successors_drop_phase", |b| {
        b.iter(|| successors(black_box(&drop), black_box(Player::Black)))
    });
    c.bench_function("successors_move_phase", |b| {
        b.iter(|| successors(black_box(&mv), black_box(Player::Black)))
    });
}

fn bench_search_drop_phase(c: &mut Criterion) {
    let board = parse_tfen(DROP_TFEN).unwrap();
    c.bench_function("select_move_drop_depth3", |b| {
        b.iter(|| select_move(black_box(&board), black_box(Player::Black), DEFAULT_DEPTH))
    });
}

fn bench_search_move_phase(c: &mut Criterion) {
    let board = parse_tfen(MOVE_TFEN).unwrap();
    c.bench_function("select_move_move_depth3", |b| {
        b.iter(|| select_move(black_box(&board), black_box(Player::Black), DEFAULT_DEPTH))
    });
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_successors,
    bench_search_drop_phase,
    bench_search_move_phase
);
criterion_main!(benches);
