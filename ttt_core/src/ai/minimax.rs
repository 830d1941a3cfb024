use crate::ai::types::{Ai, SelectMoveError};
use crate::engine::board::Board;
use crate::engine::types::{Player, Square};

/// 終局局面の評価。
mod eval;
/// ネガマックス探索本体。
mod search;
/// 探索統計。
mod stats;

pub type SearchResult = search::SearchResult;
pub type SearchStats = stats::SearchStats;

/// 評価値の範囲外の上限（ルート探索の `beta`）。
const SCORE_CEIL: i32 = 2;

/// 引き分けの評価値。
const SCORE_DRAW: i32 = 0;

/// 評価値の範囲外の下限（ルート探索の `alpha`、最善値の初期値）。
const SCORE_FLOOR: i32 = -2;

/// 負けの評価値。
const SCORE_LOSS: i32 = -1;

/// 勝ちの評価値（到達可能な最大値）。
const SCORE_WIN: i32 = 1;

/// 終局まで読み切るアルファベータ探索AI。
///
/// 直近の探索統計を保持する以外は状態を持たず、同じ盤面・手番には常に同じ手を返す。
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Agent {
    /// 直近の探索統計。
    last_stats: Option<SearchStats>,
}

impl Agent {
    /// 直近の `select_move` の探索統計を返す（未探索なら `None`）。
    #[inline]
    #[must_use]
    pub const fn last_stats(&self) -> Option<SearchStats> {
        self.last_stats
    }

    /// 初期化する。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { last_stats: None }
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Square, SelectMoveError> {
        let result = search(board, player);
        self.last_stats = Some(result.stats());
        result.best_move().ok_or(SelectMoveError::NoLegalMove)
    }
}

/// 盤面を読み切り、評価値・最善手・探索統計を返す。
///
/// 評価値は `player` 視点（勝ち `1`、引き分け `0`、負け `-1`）。
/// 着手できるマスがない場合、最善手は `None` になる。
#[inline]
#[must_use]
pub fn search(board: &Board, player: Player) -> SearchResult {
    let result = search::search_root(board, player);
    let stats = result.stats();
    tracing::debug!(
        ?player,
        best_move = ?result.best_move(),
        score = result.score(),
        nodes = stats.nodes(),
        cutoffs = stats.cutoffs(),
        early_wins = stats.early_wins(),
        "minimax search finished"
    );
    result
}

/// `player` の手番の最善手を返す。
///
/// 同点の手が複数ある場合は行優先で最初の手を選ぶため、結果は決定的。
///
/// # Errors
///
/// 着手できるマスがない（盤面が埋まっている、または決着済み）場合、
/// `SelectMoveError::NoLegalMove` を返す。
///
#[inline]
pub fn select_move(board: &Board, player: Player) -> Result<Square, SelectMoveError> {
    search(board, player)
        .best_move()
        .ok_or(SelectMoveError::NoLegalMove)
}
