use super::{
    board::{validate_dimensions, GameBoard, BLANK},
    error::{Error, GameResult},
    position::BoardPosition,
};

/// Grid-backed board representation.
///
/// Every cell is stored, blank or not, so lookups are O(1) at the cost of
/// rows x columns memory.
#[derive(Debug, Clone)]
pub struct DenseBoard {
    // Row-major: cells[row * columns + column].
    cells: Vec<char>,
    rows: usize,
    columns: usize,
    win_length: usize,
}

impl DenseBoard {
    /// Create an empty board with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimensions` or `Error::InvalidWinLength` if a
    /// parameter falls outside the allowed bounds.
    pub fn new(rows: usize, columns: usize, win_length: usize) -> GameResult<Self> {
        validate_dimensions(rows, columns, win_length)?;
        Ok(Self {
            cells: vec![BLANK; rows * columns],
            rows,
            columns,
            win_length,
        })
    }

    fn index(&self, pos: BoardPosition) -> usize {
        assert!(
            pos.row() < self.rows && pos.column() < self.columns,
            "position {} outside {}x{} board",
            pos,
            self.rows,
            self.columns
        );
        pos.row() * self.columns + pos.column()
    }
}

impl GameBoard for DenseBoard {
    fn num_rows(&self) -> usize {
        self.rows
    }

    fn num_columns(&self) -> usize {
        self.columns
    }

    fn num_to_win(&self) -> usize {
        self.win_length
    }

    fn place_token(&mut self, token: char, column: usize) -> GameResult<()> {
        if column >= self.columns {
            return Err(Error::InvalidColumn(column));
        }
        for row in 0..self.rows {
            let idx = row * self.columns + column;
            if self.cells[idx] == BLANK {
                self.cells[idx] = token;
                log::trace!("placed {token} at row {row}, column {column}");
                return Ok(());
            }
        }
        Err(Error::ColumnFull(column))
    }

    fn whats_at_pos(&self, pos: BoardPosition) -> char {
        self.cells[self.index(pos)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_stack_from_the_bottom() {
        let mut board = DenseBoard::new(4, 4, 3).unwrap();
        board.place_token('X', 2).unwrap();
        board.place_token('O', 2).unwrap();
        assert_eq!(board.whats_at_pos(BoardPosition::new(0, 2)), 'X');
        assert_eq!(board.whats_at_pos(BoardPosition::new(1, 2)), 'O');
        assert_eq!(board.whats_at_pos(BoardPosition::new(2, 2)), BLANK);
    }

    #[test]
    fn test_full_column_is_rejected() {
        let mut board = DenseBoard::new(3, 3, 3).unwrap();
        for _ in 0..3 {
            board.place_token('X', 0).unwrap();
        }
        assert!(!board.is_column_open(0));
        assert_eq!(
            board.place_token('O', 0).unwrap_err(),
            Error::ColumnFull(0)
        );
    }

    #[test]
    fn test_out_of_range_column_is_rejected() {
        let mut board = DenseBoard::new(3, 3, 3).unwrap();
        assert_eq!(
            board.place_token('X', 3).unwrap_err(),
            Error::InvalidColumn(3)
        );
    }

    #[test]
    #[should_panic(expected = "outside 3x3 board")]
    fn test_out_of_range_query_panics() {
        let board = DenseBoard::new(3, 3, 3).unwrap();
        board.whats_at_pos(BoardPosition::new(3, 0));
    }
}
