/// 探索統計。
#[derive(Default, Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchStats {
    /// ベータカットで兄弟ノードの探索を打ち切った回数。
    cutoffs: u64,
    /// 勝ちの手を見つけて即座に返した回数。
    early_wins: u64,
    /// 探索したノード数。
    nodes: u64,
}

impl SearchStats {
    /// ベータカットの回数を返す。
    #[inline]
    #[must_use]
    pub const fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// 勝ちの手による打ち切り回数を返す。
    #[inline]
    #[must_use]
    pub const fn early_wins(&self) -> u64 {
        self.early_wins
    }

    /// ベータカットの回数を加算する。
    pub(super) const fn inc_cutoffs(&mut self) {
        self.cutoffs = self.cutoffs.wrapping_add(1);
    }

    /// 勝ちの手による打ち切り回数を加算する。
    pub(super) const fn inc_early_wins(&mut self) {
        self.early_wins = self.early_wins.wrapping_add(1);
    }

    /// 探索ノード数を加算する。
    pub(super) const fn inc_nodes(&mut self) {
        self.nodes = self.nodes.wrapping_add(1);
    }

    /// 探索ノード数を返す。
    #[inline]
    #[must_use]
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }
}
