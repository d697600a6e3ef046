use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dhandho_engine::{Dhandho, GameRng, MatchState, RulesEngine};
use std::hint::black_box;

/// Play random legal moves until someone wins or `max_moves` is reached.
fn random_playout(players: usize, seed: u64, max_moves: usize) -> MatchState {
    let mut state = dhandho_engine::setup(players, GameRng::new(seed)).unwrap();
    let mut chooser = GameRng::new(seed ^ 0x5eed);

    for _ in 0..max_moves {
        if state.is_over() {
            break;
        }
        let actor = state.cursor.active_players[0];
        let moves = Dhandho.legal_moves(&state, actor);
        let mv = &moves[chooser.index_through(moves.len() - 1)];
        Dhandho.apply_move(&mut state, actor, mv).unwrap();
    }
    state
}

/// Benchmark setup alone
fn bench_setup(c: &mut Criterion) {
    c.bench_function("setup_4_players", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            black_box(dhandho_engine::setup(4, GameRng::new(seed)).unwrap())
        });
    });
}

/// Benchmark full random playouts at each table size
fn bench_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_playout");
    for players in 2..=5 {
        group.bench_with_input(BenchmarkId::from_parameter(players), &players, |b, &players| {
            b.iter(|| black_box(random_playout(players, 17, 2_000)));
        });
    }
    group.finish();
}

/// Benchmark snapshot encode and decode of a mid-match state
fn bench_snapshot(c: &mut Criterion) {
    let state = random_playout(4, 3, 150);
    c.bench_function("snapshot_roundtrip", |b| {
        b.iter(|| {
            let bytes = state.to_bytes().unwrap();
            black_box(MatchState::from_bytes(&bytes).unwrap())
        });
    });
}

criterion_group!(benches, bench_setup, bench_playout, bench_snapshot);
criterion_main!(benches);
