use std::collections::HashMap;

use super::{
    board::{validate_dimensions, GameBoard, BLANK},
    error::{Error, GameResult},
    position::BoardPosition,
};

/// Position-list board representation.
///
/// Only occupied cells are stored, keyed by player token. Memory grows with
/// the number of placed tokens rather than the board area, which pays off
/// on large, mostly empty boards; lookups scan the per-player lists.
#[derive(Debug, Clone)]
pub struct SparseBoard {
    placements: HashMap<char, Vec<BoardPosition>>,
    rows: usize,
    columns: usize,
    win_length: usize,
}

impl SparseBoard {
    /// Create an empty board with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimensions` or `Error::InvalidWinLength` if a
    /// parameter falls outside the allowed bounds.
    pub fn new(rows: usize, columns: usize, win_length: usize) -> GameResult<Self> {
        validate_dimensions(rows, columns, win_length)?;
        Ok(Self {
            placements: HashMap::new(),
            rows,
            columns,
            win_length,
        })
    }

    fn assert_in_range(&self, pos: BoardPosition) {
        assert!(
            pos.row() < self.rows && pos.column() < self.columns,
            "position {} outside {}x{} board",
            pos,
            self.rows,
            self.columns
        );
    }
}

impl GameBoard for SparseBoard {
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
            let pos = BoardPosition::new(row, column);
            if self.whats_at_pos(pos) == BLANK {
                self.placements.entry(token).or_default().push(pos);
                log::trace!("placed {token} at row {row}, column {column}");
                return Ok(());
            }
        }
        Err(Error::ColumnFull(column))
    }

    fn whats_at_pos(&self, pos: BoardPosition) -> char {
        self.assert_in_range(pos);
        for (&token, positions) in &self.placements {
            if positions.contains(&pos) {
                return token;
            }
        }
        BLANK
    }

    // No two players ever occupy the same cell, so checking a single
    // player's list is enough.
    fn is_player_at_pos(&self, pos: BoardPosition, token: char) -> bool {
        self.assert_in_range(pos);
        self.placements
            .get(&token)
            .is_some_and(|positions| positions.contains(&pos))
    }
}
