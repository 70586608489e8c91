/// A single cell location on the board.
///
/// Row 0 is the bottom of the board, so gravity pulls tokens toward
/// lower row indices. Positions are plain values compared by
/// (row, column) and are created transiently per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardPosition {
    row: usize,
    column: usize,
}

impl BoardPosition {
    /// Create a position at the given row and column.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The row of this position, counted from the bottom of the board.
    pub fn row(&self) -> usize {
        self.row
    }

    /// The column of this position.
    pub fn column(&self) -> usize {
        self.column
    }
}

impl std::fmt::Display for BoardPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}
