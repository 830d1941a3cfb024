use crate::engine::types::{Outcome, Player};

use super::{SCORE_DRAW, SCORE_LOSS, SCORE_WIN};

/// 勝敗状態を `player` 視点の評価値に変換する（進行中は引き分けと同じ 0）。
pub(super) fn outcome_score(outcome: Outcome, player: Player) -> i32 {
    match outcome {
        Outcome::Win(winner) if winner == player => SCORE_WIN,
        Outcome::Win(_) => SCORE_LOSS,
        Outcome::Draw | Outcome::InProgress => SCORE_DRAW,
    }
}
