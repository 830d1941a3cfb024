/// 盤面（グリッド）と勝敗判定の実装。
pub mod board;
/// 対局進行（手番、着手履歴）の実装。
pub mod game;
pub mod types;

pub type Board = board::Board;
pub type BoardError = board::BoardError;
pub type Game = game::Game;
pub type PlayError = game::PlayError;
pub type Cell = types::Cell;
pub type Outcome = types::Outcome;
pub type Player = types::Player;
pub type Rules = types::Rules;
pub type Square = types::Square;
