use crate::engine::board::Board;
use crate::engine::types::{Player, Square};

use super::eval::outcome_score;
use super::stats::SearchStats;
use super::{SCORE_CEIL, SCORE_FLOOR, SCORE_WIN};

/// 探索結果。
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchResult {
    /// 最善手（着手できるマスがなければ `None`）。
    best_move: Option<Square>,
    /// 手番視点の評価値。
    score: i32,
    /// 探索統計。
    stats: SearchStats,
}

impl SearchResult {
    /// 最善手を返す。
    #[inline]
    #[must_use]
    pub const fn best_move(&self) -> Option<Square> {
        self.best_move
    }

    /// 手番視点の評価値を返す（勝ち `1`、引き分け `0`、負け `-1`）。
    ///
    /// 着手できるマスがない場合は範囲外の `-2` のまま返る。
    #[inline]
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// 探索統計を返す。
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// ルート探索（窓は評価値の範囲外 `(-2, 2)`）。
pub(super) fn search_root(board: &Board, player: Player) -> SearchResult {
    let mut stats = SearchStats::default();
    let (score, best_move) = negamax(board, player, SCORE_FLOOR, SCORE_CEIL, &mut stats);

    SearchResult {
        best_move,
        score,
        stats,
    }
}

/// ネガマックス（αβ付き、終局まで探索）。
///
/// 返す評価値は `player` 視点。子ノードには窓を反転した `(-beta, -max(alpha, best))` を渡す。
pub(super) fn negamax(
    board: &Board,
    player: Player,
    alpha: i32,
    beta: i32,
    stats: &mut SearchStats,
) -> (i32, Option<Square>) {
    stats.inc_nodes();

    let outcome = board.outcome();
    if outcome.is_over() {
        return (outcome_score(outcome, player), None);
    }

    let opponent = player.opponent();
    let mut best_score = SCORE_FLOOR;
    let mut best_move: Option<Square> = None;
    // 子局面用の盤面。兄弟ごとに親の内容で上書きして使い回す。
    let mut child = board.clone();

    for square in board.empty_squares() {
        child.clone_from(board);
        if child.place(square.row(), square.col(), player).is_err() {
            continue;
        }

        let window = alpha.max(best_score);
        let (child_score, _) = negamax(
            &child,
            opponent,
            beta.wrapping_neg(),
            window.wrapping_neg(),
            stats,
        );
        let score = child_score.wrapping_neg();

        if score == SCORE_WIN {
            stats.inc_early_wins();
            return (score, Some(square));
        }
        if score > best_score {
            best_score = score;
            best_move = Some(square);
        }
        if best_score >= beta {
            stats.inc_cutoffs();
            break;
        }
    }

    (best_score, best_move)
}
