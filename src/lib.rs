// #![deny(warnings)]
#![warn(missing_docs)]
//! Extended ConnectX game crate.
//!
//! A generalized Connect Four: a rectangular board of configurable size,
//! configurable win length and 2 to 10 players dropping tokens into columns
//! under gravity. The board contract lives in [`GameBoard`], with a dense and
//! a sparse representation behind it, and [`Session`] turns column selections
//! into [`Directive`]s for whatever layer is drawing the game.
pub(crate) mod game;

pub use game::board::{
    create_board, BoardKind, GameBoard, BLANK, MAX_COLUMNS, MAX_ROWS, MAX_WIN_LENGTH, MIN_COLUMNS,
    MIN_ROWS, MIN_WIN_LENGTH,
};
pub use game::dense::DenseBoard;
pub use game::error::{Error, GameResult};
pub use game::position::BoardPosition;
pub use game::session::{Directive, Session, MAX_PLAYERS, MIN_PLAYERS, PLAYER_TOKENS};
pub use game::sparse::SparseBoard;
pub use game::Game;
