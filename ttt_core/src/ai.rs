/// アルファベータ付きネガマックスで最善手を選ぶAI。
pub mod minimax;
/// 空きマスからランダムに1手選ぶAI。
pub mod random;
pub mod types;

pub type SelectMoveError = types::SelectMoveError;
