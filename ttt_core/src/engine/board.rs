use core::fmt;

use crate::engine::types::{Cell, Outcome, Player, Rules, Square};

/// 盤面の生成・参照・着手に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum BoardError {
    /// 与えられたグリッドが `dimension × dimension` ではない。
    #[error("grid must be {dimension}x{dimension}: got {rows} rows, first bad row {bad_row:?}")]
    GridShape {
        /// 長さが一致しない最初の行（行数自体が違う場合は `None`）。
        bad_row: Option<usize>,
        /// 期待する一辺の長さ。
        dimension: usize,
        /// 与えられた行数。
        rows: usize,
    },
    /// 座標が盤面の範囲外。
    #[error("square ({row}, {col}) is outside the {dimension}x{dimension} board")]
    IndexOutOfBounds {
        /// 指定された列。
        col: usize,
        /// 盤の一辺の長さ。
        dimension: usize,
        /// 指定された行。
        row: usize,
    },
    /// 盤の一辺の長さが不正（0、またはマス数が `usize` に収まらない）。
    #[error("board dimension must be a positive size, got {0}")]
    InvalidDimension(usize),
}

/// N×N の盤面。
///
/// - マスは行優先で `dimension * dimension` 個を保持する。
/// - 手番は持たない（着手のたびに呼び出し側がプレイヤーを渡す）。
/// - `clone` は常に独立したコピーを返す（複製元と状態を共有しない）。
#[derive(Debug, Eq, PartialEq, Hash)]
pub struct Board {
    /// 行優先で並べたマス。
    cells: Vec<Cell>,
    /// 盤の一辺の長さ（1以上、生成後は不変）。
    dimension: usize,
    /// 勝敗ルール。
    rules: Rules,
}

impl Board {
    /// 盤の一辺の長さを返す。
    #[inline]
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// 空きマスを行優先（行の昇順、同じ行では列の昇順）で返す。
    ///
    /// この順序は探索のタイブレークを決めるため、変更してはならない。
    #[inline]
    #[must_use]
    pub fn empty_squares(&self) -> Vec<Square> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, cell)| cell.is_empty())
            .map(|(index, _)| self.square_at(index))
            .collect()
    }

    /// 既存のグリッドをコピーして盤面を生成する。
    ///
    /// `grid` は `dimension` 行、各行 `dimension` マスであること。内容は複製され、
    /// 呼び出し側のグリッドとは共有しない。
    ///
    /// # Errors
    ///
    /// - `BoardError::InvalidDimension`: `dimension` が 0 の場合
    /// - `BoardError::GridShape`: 行数または行の長さが `dimension` と異なる場合
    ///
    #[inline]
    pub fn from_grid<R: AsRef<[Cell]>>(dimension: usize, grid: &[R]) -> Result<Self, BoardError> {
        let mut board = Self::new(dimension)?;

        let shape_error = |bad_row: Option<usize>| BoardError::GridShape {
            bad_row,
            dimension,
            rows: grid.len(),
        };
        if grid.len() != dimension {
            return Err(shape_error(None));
        }
        if let Some(bad_row) = grid.iter().position(|row| row.as_ref().len() != dimension) {
            return Err(shape_error(Some(bad_row)));
        }

        board.cells.clear();
        board
            .cells
            .extend(grid.iter().flat_map(|row| row.as_ref().iter().copied()));
        Ok(board)
    }

    /// 指定マスの状態を返す。
    ///
    /// # Errors
    ///
    /// 座標が盤面の範囲外の場合、`BoardError::IndexOutOfBounds` を返す。
    ///
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let index = self.index_of(row, col)?;
        self.cells
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// 行・列をマス配列のインデックスへ変換する。
    fn index_of(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.dimension || col >= self.dimension {
            return Err(self.out_of_bounds(row, col));
        }

        row.checked_mul(self.dimension)
            .and_then(|base| base.checked_add(col))
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// 空きマスが残っていないかを返す。
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_empty())
    }

    /// 1本の列（行・列・対角線）がすべて同じ印なら、その持ち主を返す。
    fn line_owner<I: IntoIterator<Item = (usize, usize)>>(&self, line: I) -> Option<Player> {
        let mut squares = line.into_iter();
        let (row, col) = squares.next()?;
        let owner = self.get(row, col).ok()?.owner()?;
        let mark = owner.mark();

        squares
            .all(|(r, c)| self.get(r, c).ok() == Some(mark))
            .then_some(owner)
    }

    /// 空の盤面を生成する（ルールは `Rules::Standard`）。
    ///
    /// # Errors
    ///
    /// `dimension` が 0、またはマス数が `usize` に収まらない場合、
    /// `BoardError::InvalidDimension` を返す。
    ///
    #[inline]
    pub fn new(dimension: usize) -> Result<Self, BoardError> {
        if dimension == usize::MIN {
            return Err(BoardError::InvalidDimension(dimension));
        }

        let count = dimension
            .checked_mul(dimension)
            .ok_or(BoardError::InvalidDimension(dimension))?;

        Ok(Self {
            cells: vec![Cell::Empty; count],
            dimension,
            rules: Rules::Standard,
        })
    }

    /// 範囲外エラーを生成する。
    const fn out_of_bounds(&self, row: usize, col: usize) -> BoardError {
        BoardError::IndexOutOfBounds {
            col,
            dimension: self.dimension,
            row,
        }
    }

    /// 現在の勝敗状態を判定する。
    ///
    /// 行 → 列 → 主対角線 `(i, i)` → 副対角線 `(i, n-1-i)` の順に調べ、
    /// 最初に揃っていた列で勝者を決める。`Rules::Misere` では揃えた側の相手が勝者になる。
    /// 揃った列がなく空きマスもなければ引き分け。
    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        let n = self.dimension;
        let last = n.saturating_sub(1);

        let completed = (0..n)
            .find_map(|row| self.line_owner((0..n).map(|col| (row, col))))
            .or_else(|| (0..n).find_map(|col| self.line_owner((0..n).map(|row| (row, col)))))
            .or_else(|| self.line_owner((0..n).map(|i| (i, i))))
            .or_else(|| self.line_owner((0..n).map(|i| (i, last.saturating_sub(i)))));

        match completed {
            Some(owner) => Outcome::Win(match self.rules {
                Rules::Misere => owner.opponent(),
                Rules::Standard => owner,
            }),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// 指定マスに `player` の印を置く。
    ///
    /// すでに印があるマスへの着手は何もしない（エラーにもならない）。
    /// 呼び出し側は `empty_squares` が返したマスにだけ着手すること。
    ///
    /// # Errors
    ///
    /// 座標が盤面の範囲外の場合、`BoardError::IndexOutOfBounds` を返す。
    ///
    #[inline]
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        let index = self.index_of(row, col)?;
        if let Some(cell) = self.cells.get_mut(index).filter(|cell| cell.is_empty()) {
            *cell = player.mark();
        }
        Ok(())
    }

    /// 勝敗ルールを返す。
    #[inline]
    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    /// マス配列のインデックスを `Square` に変換する。
    fn square_at(&self, index: usize) -> Square {
        let row = index.checked_div(self.dimension).unwrap_or(usize::MIN);
        let col = index.checked_rem(self.dimension).unwrap_or(usize::MIN);
        Square::new(row, col)
    }

    /// 勝敗ルールを差し替えた盤面を返す。
    #[inline]
    #[must_use]
    pub const fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }
}

impl Clone for Board {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            dimension: self.dimension,
            rules: self.rules,
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        // 確保済みのバッファを使い回すが、中身は常に全マスをコピーする。
        self.cells.clone_from(&source.cells);
        self.dimension = source.dimension;
        self.rules = source.rules;
    }
}

impl fmt::Display for Board {
    /// 各行を `" | "` で区切り、行の間に `4n-3` 個の `-` を挟んで出力する。
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "-".repeat(self.dimension.saturating_mul(4).saturating_sub(3));

        for (index, row) in self.cells.chunks(self.dimension.max(1)).enumerate() {
            if index != usize::MIN {
                writeln!(f, "{separator}")?;
            }
            let glyphs: Vec<String> = row.iter().map(|cell| cell.glyph().to_string()).collect();
            writeln!(f, "{}", glyphs.join(" | "))?;
        }

        Ok(())
    }
}
