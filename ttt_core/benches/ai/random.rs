//! `ttt_core::ai::random` の性能計測（1手選択）。

use criterion::BatchSize;
use criterion::Criterion;
use core::hint::black_box;
use ttt_core::ai::types::Ai;
use ttt_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// `random::Agent::select_move` を計測する。
fn bench_select_move(criterion: &mut Criterion) {
    let Ok(board) = engine::Board::new(3) else {
        return;
    };

    criterion.bench_function("ai/random/select_move_empty", |bench| {
        bench.iter_batched(
            || ai::random::Agent::new(u64::MIN),
            |mut agent| black_box(agent.select_move(&board, engine::Player::X)),
            BatchSize::SmallInput,
        );
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_select_move(&mut criterion);
    criterion.final_summary();
}
