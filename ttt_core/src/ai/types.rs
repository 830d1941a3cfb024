use crate::engine::board::Board;
use crate::engine::types::{Player, Square};

/// 手の選択に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SelectMoveError {
    /// 着手できるマスがない（盤面が埋まっている、または決着済み）。
    #[error("no legal move: the board has no empty square to play")]
    NoLegalMove,
}

/// 手を選択するAI。
///
/// 盤面と手番を受け取り、着手するマスを返す。盤面は読み取りのみで、変更しない。
pub trait Ai {
    /// `player` の手番として次の手を選択する。
    ///
    /// # Errors
    ///
    /// 着手できるマスがない場合、`SelectMoveError::NoLegalMove` を返す。
    ///
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Square, SelectMoveError>;
}

impl<F> Ai for F
where
    F: FnMut(&Board, Player) -> Result<Square, SelectMoveError>,
{
    #[inline]
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Square, SelectMoveError> {
        self(board, player)
    }
}
