/// 手番（プレイヤー）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Player {
    /// 後手（`O`）。
    O,
    /// 先手（`X`）。
    X,
}

impl Player {
    /// 相手側のプレイヤーを返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::O => Self::X,
            Self::X => Self::O,
        }
    }

    /// このプレイヤーの印（マスの状態）を返す。
    #[inline]
    #[must_use]
    pub const fn mark(self) -> Cell {
        match self {
            Self::O => Cell::O,
            Self::X => Cell::X,
        }
    }
}

/// マスの状態。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Cell {
    /// 空きマス。
    #[default]
    Empty,
    /// `O` の印。
    O,
    /// `X` の印。
    X,
}

impl Cell {
    /// 表示用の1文字を返す（空きマスは空白）。
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::O => 'O',
            Self::X => 'X',
        }
    }

    /// 空きマスかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// 印の持ち主を返す（空きマスなら `None`）。
    #[inline]
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::O => Some(Player::O),
            Self::X => Some(Player::X),
        }
    }
}

/// 局面の勝敗状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Outcome {
    /// 引き分け（空きマスなし、揃った列なし）。
    Draw,
    /// 進行中。
    InProgress,
    /// 勝者が決まった。
    Win(Player),
}

impl Outcome {
    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// 勝敗ルール。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Rules {
    /// 1列を揃えた側の負け（逆ルール）。
    Misere,
    /// 1列を揃えた側の勝ち。
    #[default]
    Standard,
}

/// 盤面上のマス（行、列）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Square {
    /// 列番号（0始まり）。
    col: usize,
    /// 行番号（0始まり）。
    row: usize,
}

impl Square {
    /// 列番号を返す。
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// 行・列から `Square` を生成する（盤面の範囲チェックは行わない）。
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { col, row }
    }

    /// 行番号を返す。
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }
}

impl From<(usize, usize)> for Square {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
