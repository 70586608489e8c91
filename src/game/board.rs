use super::{
    dense::DenseBoard,
    error::{Error, GameResult},
    position::BoardPosition,
    sparse::SparseBoard,
};

/// Smallest allowed number of rows.
pub const MIN_ROWS: usize = 3;
/// Largest allowed number of rows.
pub const MAX_ROWS: usize = 100;
/// Smallest allowed number of columns.
pub const MIN_COLUMNS: usize = 3;
/// Largest allowed number of columns.
pub const MAX_COLUMNS: usize = 100;
/// Smallest allowed win length.
pub const MIN_WIN_LENGTH: usize = 3;
/// Largest allowed win length.
pub const MAX_WIN_LENGTH: usize = 25;

/// Character marking an unoccupied cell.
pub const BLANK: char = ' ';

/// Selects which representation backs a board.
///
/// Both behave identically through the [`GameBoard`] contract; they differ
/// only in the memory/lookup trade-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardKind {
    /// Grid of cells, O(1) lookup.
    Dense,
    /// Per-player position lists, compact on large and mostly empty boards.
    Sparse,
}

/// Create an empty board with the given dimensions, backed by the chosen
/// representation.
///
/// # Errors
///
/// Returns `Error::InvalidDimensions` if `rows` or `columns` falls outside
/// `MIN_ROWS..=MAX_ROWS` / `MIN_COLUMNS..=MAX_COLUMNS`, and
/// `Error::InvalidWinLength` if `win_length` falls outside
/// `MIN_WIN_LENGTH..=MAX_WIN_LENGTH`.
pub fn create_board(
    rows: usize,
    columns: usize,
    win_length: usize,
    kind: BoardKind,
) -> GameResult<Box<dyn GameBoard>> {
    Ok(match kind {
        BoardKind::Dense => Box::new(DenseBoard::new(rows, columns, win_length)?),
        BoardKind::Sparse => Box::new(SparseBoard::new(rows, columns, win_length)?),
    })
}

/// Bounds check shared by every board constructor.
pub(crate) fn validate_dimensions(
    rows: usize,
    columns: usize,
    win_length: usize,
) -> GameResult<()> {
    if !(MIN_ROWS..=MAX_ROWS).contains(&rows) || !(MIN_COLUMNS..=MAX_COLUMNS).contains(&columns) {
        return Err(Error::InvalidDimensions { rows, columns });
    }
    if !(MIN_WIN_LENGTH..=MAX_WIN_LENGTH).contains(&win_length) {
        return Err(Error::InvalidWinLength(win_length));
    }
    Ok(())
}

/// Contract shared by every board representation.
///
/// Implementations provide the five primitive operations; the win, tie and
/// open-column checks are implemented once here, purely in terms of those
/// primitives, so the detection logic is never duplicated per
/// representation.
///
/// Board invariant: every cell holds either [`BLANK`] or one player token,
/// and within a column the occupied cells form a contiguous run starting at
/// row 0. Tokens are append-only; nothing is ever removed or moved.
pub trait GameBoard: std::fmt::Debug {
    /// Number of rows on the board.
    fn num_rows(&self) -> usize;

    /// Number of columns on the board.
    fn num_columns(&self) -> usize;

    /// Number of consecutive same-player tokens required to win.
    fn num_to_win(&self) -> usize;

    /// Drop `token` into `column`. It lands in the lowest blank row.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidColumn` if `column` is beyond the right edge
    /// of the board, and `Error::ColumnFull` if the column has no blank cell
    /// left. Callers are expected to check [`Self::is_column_open`] first;
    /// the error is a guard, not an overflow.
    fn place_token(&mut self, token: char, column: usize) -> GameResult<()>;

    /// The token at `pos`, or [`BLANK`] if the cell is unoccupied.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board. An out-of-range query is a
    /// caller bug, not a user-recoverable condition, so it fails loudly
    /// rather than being clamped.
    fn whats_at_pos(&self, pos: BoardPosition) -> char;

    /// True iff at least one cell in `column` is blank.
    ///
    /// Scans bottom to top; gravity guarantees the occupied cells are
    /// contiguous, so any blank means the column is open.
    fn is_column_open(&self, column: usize) -> bool {
        (0..self.num_rows()).any(|row| self.whats_at_pos(BoardPosition::new(row, column)) == BLANK)
    }

    /// True iff `token` occupies `pos`.
    fn is_player_at_pos(&self, pos: BoardPosition, token: char) -> bool {
        self.whats_at_pos(pos) == token
    }

    /// Check whether the most recent token placed in `column` completed a
    /// line of exactly [`Self::num_to_win`].
    ///
    /// This is a local check around the top-most occupied cell of `column`,
    /// not a full-board scan: each of the four axes costs O(win length).
    /// Returns false for an empty column.
    fn check_for_win(&self, column: usize) -> bool {
        // Top of the contiguous run in this column is where the last token
        // landed.
        let mut last = None;
        for row in 0..self.num_rows() {
            if self.whats_at_pos(BoardPosition::new(row, column)) == BLANK {
                break;
            }
            last = Some(row);
        }
        let Some(row) = last else {
            return false;
        };

        let pos = BoardPosition::new(row, column);
        let token = self.whats_at_pos(pos);

        self.check_horiz_win(pos, token)
            || self.check_vert_win(pos, token)
            || self.check_diag_win(pos, token)
    }

    /// True iff placing `token` at `pos` completed a horizontal line.
    ///
    /// Walks right then left from `pos`, stopping at the first mismatching
    /// cell or board edge; the run must be unbroken.
    fn check_horiz_win(&self, pos: BoardPosition, token: char) -> bool {
        let run = 1 + run_length(self, pos, token, 0, 1) + run_length(self, pos, token, 0, -1);
        run == self.num_to_win()
    }

    /// True iff placing `token` at `pos` completed a vertical line.
    fn check_vert_win(&self, pos: BoardPosition, token: char) -> bool {
        let run = 1 + run_length(self, pos, token, 1, 0) + run_length(self, pos, token, -1, 0);
        run == self.num_to_win()
    }

    /// True iff placing `token` at `pos` completed a line on either
    /// diagonal axis (`/` or `\`).
    fn check_diag_win(&self, pos: BoardPosition, token: char) -> bool {
        let rising = 1 + run_length(self, pos, token, 1, 1) + run_length(self, pos, token, -1, -1);
        if rising == self.num_to_win() {
            return true;
        }
        let falling = 1 + run_length(self, pos, token, 1, -1) + run_length(self, pos, token, -1, 1);
        falling == self.num_to_win()
    }

    /// True iff no blank cell remains anywhere on the board.
    ///
    /// Callers check this only when the current move did not already win;
    /// a full board with a completed line still counts as a tie.
    fn check_tie(&self) -> bool {
        for row in 0..self.num_rows() {
            for column in 0..self.num_columns() {
                if self.whats_at_pos(BoardPosition::new(row, column)) == BLANK {
                    return false;
                }
            }
        }
        true
    }

    /// Textual dump of the full grid.
    ///
    /// First a header row of column indices, then the rows from the top row
    /// index down to row 0, each cell bracketed by `|`.
    fn render(&self) -> String {
        let mut out = String::from("|");
        for column in 0..self.num_columns() {
            out.push_str(&column.to_string());
            out.push('|');
        }
        out.push('\n');
        for row in (0..self.num_rows()).rev() {
            for column in 0..self.num_columns() {
                out.push('|');
                out.push(self.whats_at_pos(BoardPosition::new(row, column)));
            }
            out.push_str("|\n");
        }
        out
    }
}

// Count matching tokens in one direction from pos, excluding pos itself.
// Stops after num_to_win - 1 steps, at the first mismatch, or at the board
// edge, whichever comes first.
fn run_length<B: GameBoard + ?Sized>(
    board: &B,
    pos: BoardPosition,
    token: char,
    row_step: isize,
    col_step: isize,
) -> usize {
    let mut count = 0;
    let mut row = pos.row() as isize;
    let mut column = pos.column() as isize;
    for _ in 1..board.num_to_win() {
        row += row_step;
        column += col_step;
        if row < 0
            || column < 0
            || row >= board.num_rows() as isize
            || column >= board.num_columns() as isize
        {
            break;
        }
        if board.whats_at_pos(BoardPosition::new(row as usize, column as usize)) != token {
            break;
        }
        count += 1;
    }
    count
}
