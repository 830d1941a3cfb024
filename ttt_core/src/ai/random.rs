use crate::ai::types::{Ai, SelectMoveError};
use crate::engine::board::Board;
use crate::engine::types::{Player, Square};

/// 64-bit 線形合同法 (LCG) の簡易 RNG。
/// - `seed` で決定的に再現可能
#[derive(Debug, Clone, Copy)]
struct Lcg64 {
    /// 内部状態。
    state: u64,
}

impl Lcg64 {
    /// LCG の内部状態を `seed` から初期化する。
    #[inline]
    const fn new(seed: u64) -> Self {
        // seed が 0 でも偏らないように軽く攪拌する。
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    /// 次の u32 を生成する（上位 32bit を返す）。
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // PCG 系で採用される LCG 定数。
        const LCG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
        const LCG_INCREMENT: u64 = 1_442_695_040_888_963_407;

        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);

        u32::try_from(self.state >> 32).unwrap_or(u32::MAX)
    }
}

/// 空きマスからランダムに1手を選択するAI。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent {
    /// 乱数生成器。
    rng: Lcg64,
}

impl Agent {
    /// `seed` を用いて初期化する。
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            rng: Lcg64::new(seed),
        }
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Square, SelectMoveError> {
        if board.outcome().is_over() {
            return Err(SelectMoveError::NoLegalMove);
        }

        let squares = board.empty_squares();
        let index = choose_index(squares.len(), self.rng.next_u32());
        let square = squares
            .get(index)
            .copied()
            .ok_or(SelectMoveError::NoLegalMove)?;

        tracing::trace!(?player, ?square, "random move selected");
        Ok(square)
    }
}

/// `0..len` から `random` に基づき1つ選択して返す（`len` が 0 なら 0）。
fn choose_index(len: usize, random: u32) -> usize {
    let Ok(len_u64) = u64::try_from(len) else {
        return usize::MIN;
    };

    // random / 2^32 を [0, 1) とみなして len 倍する（剰余による偏りを避ける）。
    let product = u64::from(random).wrapping_mul(len_u64);
    usize::try_from(product.wrapping_shr(32)).unwrap_or(usize::MIN)
}
