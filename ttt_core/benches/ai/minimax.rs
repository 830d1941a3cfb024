//! `ttt_core::ai::minimax` の性能計測（1手選択）。

use criterion::BenchmarkId;
use criterion::Criterion;
use core::hint::black_box;
use ttt_core::ai::types::Ai;
use ttt_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 指定手数だけ `minimax` 同士で進めた局面と手番を返す（途中で終局した場合はその時点で止める）。
fn board_after_plies(plies: u8) -> Option<(engine::Board, engine::Player)> {
    let mut game = engine::Game::new(3, engine::Rules::Standard).ok()?;
    let mut agent = ai::minimax::Agent::new();

    for _ply in u8::MIN..plies {
        if game.is_over() {
            break;
        }
        let square = agent.select_move(game.board(), game.side_to_move()).ok()?;
        game.play(square).ok()?;
    }

    Some((game.board().clone(), game.side_to_move()))
}

/// ベンチ用に代表局面をいくつか用意する（空盤、1手後、3手後）。
fn board_samples() -> Vec<(engine::Board, engine::Player)> {
    [0, 1, 3].into_iter().filter_map(board_after_plies).collect()
}

/// `minimax::select_move` を計測する。
fn bench_select_move(criterion: &mut Criterion) {
    let samples = board_samples();
    let mut group = criterion.benchmark_group("ai/minimax/select_move");

    for (index, sample) in samples.iter().enumerate() {
        let bench_id = BenchmarkId::new("pos", index);
        group.bench_with_input(bench_id, sample, |bench, (board, player)| {
            bench.iter(|| black_box(ai::minimax::select_move(board, *player)));
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_select_move(&mut criterion);
    criterion.final_summary();
}
