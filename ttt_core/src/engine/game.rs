use crate::engine::board::{Board, BoardError};
use crate::engine::types::{Outcome, Player, Rules, Square};

/// 手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    #[error("game is already over")]
    GameOver,
    /// 指定マスにはすでに印がある。
    #[error("square ({row}, {col}) is already occupied")]
    IllegalMove {
        /// 指定された列。
        col: usize,
        /// 指定された行。
        row: usize,
    },
    /// 指定マスが盤面の範囲外。
    #[error(transparent)]
    OutOfBounds(#[from] BoardError),
}

/// 1ゲームの進行を管理する構造体。
///
/// 手番は `Board` ではなくこの構造体が持つ。`Board::place` と違い、
/// 埋まっているマスへの着手はエラーとして扱う。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の盤面。
    board: Board,
    /// これまでの着手（先手から順）。
    history: Vec<Square>,
    /// 次に着手するプレイヤー。
    side_to_move: Player,
}

impl Game {
    /// 現在の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 既存の盤面と手番から対局を再開する（着手履歴は空）。
    #[inline]
    #[must_use]
    pub const fn from_board(board: Board, side_to_move: Player) -> Self {
        Self {
            board,
            history: Vec::new(),
            side_to_move,
        }
    }

    /// これまでの着手を返す。
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Square] {
        &self.history
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome().is_over()
    }

    /// 空の盤面から対局を開始する（`X` が先手）。
    ///
    /// # Errors
    ///
    /// `dimension` が不正な場合、`BoardError::InvalidDimension` を返す。
    ///
    #[inline]
    pub fn new(dimension: usize, rules: Rules) -> Result<Self, BoardError> {
        let board = Board::new(dimension)?.with_rules(rules);
        Ok(Self::from_board(board, Player::X))
    }

    /// 現在の勝敗状態を返す。
    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// 手番のプレイヤーとして `square` に着手し、手番を交代する。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す（盤面も手番も変化しない）：
    /// - `PlayError::GameOver`: すでに終局している場合
    /// - `PlayError::OutOfBounds`: 座標が盤面の範囲外の場合
    /// - `PlayError::IllegalMove`: 指定マスがすでに埋まっている場合
    ///
    #[inline]
    pub fn play(&mut self, square: Square) -> Result<Outcome, PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }

        let (row, col) = (square.row(), square.col());
        if !self.board.get(row, col)?.is_empty() {
            return Err(PlayError::IllegalMove { col, row });
        }

        self.board.place(row, col, self.side_to_move)?;
        self.history.push(square);
        self.side_to_move = self.side_to_move.opponent();

        Ok(self.outcome())
    }

    /// 次に着手するプレイヤーを返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Player {
        self.side_to_move
    }
}
