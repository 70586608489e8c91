use super::{
    board::{GameBoard, BLANK},
    error::{Error, GameResult},
    position::BoardPosition,
};

/// Smallest allowed number of players.
pub const MIN_PLAYERS: usize = 2;
/// Largest allowed number of players.
pub const MAX_PLAYERS: usize = 10;

/// Hard coded player tokens, handed out in order. Maximum of 10 players.
pub const PLAYER_TOKENS: [char; 10] = ['X', 'O', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// An instruction the presentation layer must carry out.
///
/// The session never draws anything itself; each accepted input produces a
/// batch of these for whatever layer owns the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Show a status message to the players.
    SetMessage(String),
    /// A token landed on the board and should be drawn.
    SetMarker {
        /// Row the token landed in, counted from the bottom.
        row: usize,
        /// Column the token landed in.
        column: usize,
        /// The token that was placed.
        token: char,
    },
    /// The finished game was acknowledged; build a fresh board and session.
    StartNewGame,
}

/// Tracks whose turn it is and interprets column selections against the
/// board.
///
/// The turn index is always in `0..num_players`, and the end-of-game flag
/// is set only after a win or tie has been detected and not yet
/// acknowledged by a further input.
#[derive(Debug)]
pub struct Session {
    board: Box<dyn GameBoard>,
    tokens: Vec<char>,
    turn: usize,
    game_over: bool,
}

impl Session {
    /// Create a session for `num_players` players on the given board.
    ///
    /// Tokens are drawn in order from [`PLAYER_TOKENS`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPlayerCount` if `num_players` falls outside
    /// `MIN_PLAYERS..=MAX_PLAYERS`.
    pub fn new(board: Box<dyn GameBoard>, num_players: usize) -> GameResult<Self> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(Error::InvalidPlayerCount(num_players));
        }
        Ok(Self {
            board,
            tokens: PLAYER_TOKENS[..num_players].to_vec(),
            turn: 0,
            game_over: false,
        })
    }

    /// Token of the player whose turn it is.
    pub fn current_token(&self) -> char {
        self.tokens[self.turn]
    }

    /// Number of players in this session.
    pub fn num_players(&self) -> usize {
        self.tokens.len()
    }

    /// True once a win or tie has been detected and not yet acknowledged.
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Read access to the board, for rendering.
    pub fn board(&self) -> &dyn GameBoard {
        self.board.as_ref()
    }

    /// Process one column selection and return the directives it produced.
    ///
    /// After a finished game, the next selection acknowledges the result:
    /// no token is placed, the turn resets and a [`Directive::StartNewGame`]
    /// asks the presentation layer to construct a fresh board and session.
    /// A full or nonexistent column yields only a message and leaves all
    /// state untouched. Otherwise the token is placed and a tie is reported
    /// ahead of a win if the move completed both.
    pub fn handle_column_select(&mut self, column: usize) -> Vec<Directive> {
        if self.game_over {
            log::debug!("finished game acknowledged, requesting a new one");
            self.game_over = false;
            self.turn = 0;
            return vec![Directive::StartNewGame];
        }

        if column >= self.board.num_columns() {
            return vec![Directive::SetMessage(format!(
                "Column {column} does not exist. Pick a different one."
            ))];
        }
        if !self.board.is_column_open(column) {
            return vec![Directive::SetMessage(
                "The selected column is full. Pick a different one.".to_string(),
            )];
        }

        // Destination row is the lowest blank cell in the column.
        let mut row = 0;
        for r in 0..self.board.num_rows() {
            if self.board.whats_at_pos(BoardPosition::new(r, column)) == BLANK {
                row = r;
                break;
            }
        }

        let token = self.current_token();
        let mut directives = match self.board.place_token(token, column) {
            Ok(()) => vec![Directive::SetMarker { row, column, token }],
            // The column was checked above, so this should be unreachable;
            // surface it as a message rather than crashing the game.
            Err(err) => return vec![Directive::SetMessage(err.to_string())],
        };
        log::debug!("player {token} placed at row {row}, column {column}");

        // Tie takes precedence over a win completed by the same move.
        if self.board.check_tie() {
            directives.push(Directive::SetMessage(
                "Tie game! Press any button to start a new game.".to_string(),
            ));
            self.game_over = true;
        } else if self.board.check_for_win(column) {
            directives.push(Directive::SetMessage(format!(
                "Player {token} won! Press any button to start a new game."
            )));
            self.game_over = true;
        }

        self.turn = (self.turn + 1) % self.tokens.len();

        if !self.game_over {
            directives.push(Directive::SetMessage(format!(
                "It is {}'s turn.",
                self.current_token()
            )));
        }

        directives
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{create_board, BoardKind};

    fn session(rows: usize, columns: usize, win_length: usize, players: usize) -> Session {
        let board = create_board(rows, columns, win_length, BoardKind::Dense).unwrap();
        Session::new(board, players).unwrap()
    }

    fn messages(directives: &[Directive]) -> Vec<&str> {
        directives
            .iter()
            .filter_map(|d| match d {
                Directive::SetMessage(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_player_count_bounds() {
        let board = create_board(3, 3, 3, BoardKind::Dense).unwrap();
        assert_eq!(
            Session::new(board, 1).unwrap_err(),
            Error::InvalidPlayerCount(1)
        );
        let board = create_board(3, 3, 3, BoardKind::Dense).unwrap();
        assert_eq!(
            Session::new(board, 11).unwrap_err(),
            Error::InvalidPlayerCount(11)
        );
        let board = create_board(3, 3, 3, BoardKind::Dense).unwrap();
        let session = Session::new(board, 10).unwrap();
        assert_eq!(session.num_players(), 10);
        assert_eq!(session.current_token(), 'X');
    }

    #[test]
    fn test_move_emits_marker_and_turn_message() {
        let mut session = session(3, 3, 3, 2);
        let directives = session.handle_column_select(1);
        assert_eq!(
            directives,
            vec![
                Directive::SetMarker {
                    row: 0,
                    column: 1,
                    token: 'X'
                },
                Directive::SetMessage("It is O's turn.".to_string()),
            ]
        );
        assert_eq!(session.current_token(), 'O');
        assert!(!session.is_over());
    }

    #[test]
    fn test_full_column_leaves_state_unchanged() {
        let mut session = session(3, 3, 3, 2);
        for _ in 0..3 {
            session.handle_column_select(0);
        }
        let before = session.board().render();
        let turn_before = session.current_token();
        let directives = session.handle_column_select(0);
        assert_eq!(
            messages(&directives),
            vec!["The selected column is full. Pick a different one."]
        );
        assert_eq!(session.board().render(), before);
        assert_eq!(session.current_token(), turn_before);
        assert!(!session.is_over());
    }

    #[test]
    fn test_nonexistent_column_leaves_state_unchanged() {
        let mut session = session(3, 3, 3, 2);
        let directives = session.handle_column_select(7);
        assert_eq!(
            messages(&directives),
            vec!["Column 7 does not exist. Pick a different one."]
        );
        assert_eq!(session.current_token(), 'X');
        assert!(!session.is_over());
    }

    #[test]
    fn test_turn_rotation_returns_to_first_player() {
        let mut session = session(5, 5, 4, 3);
        assert_eq!(session.current_token(), 'X');
        session.handle_column_select(0);
        assert_eq!(session.current_token(), 'O');
        session.handle_column_select(1);
        assert_eq!(session.current_token(), 'A');
        session.handle_column_select(2);
        assert_eq!(session.current_token(), 'X');
    }

    #[test]
    fn test_vertical_win_reports_winner() {
        // X plays column 0, O plays column 1; X completes 3 in a column.
        let mut session = session(3, 4, 3, 2);
        session.handle_column_select(0);
        session.handle_column_select(1);
        session.handle_column_select(0);
        session.handle_column_select(1);
        let directives = session.handle_column_select(0);
        assert_eq!(
            messages(&directives),
            vec!["Player X won! Press any button to start a new game."]
        );
        assert!(session.is_over());
    }

    #[test]
    fn test_tie_takes_precedence_over_win() {
        // 3x3, win 3, 2 players. Fill all but (2,2), then let X complete
        // the vertical X run in column 2 with the final cell: the board is
        // simultaneously full and contains a winning line, and must report
        // a tie.
        //
        //   row 2: O O X   <- last move
        //   row 1: X O X
        //   row 0: O X X
        let mut board = create_board(3, 3, 3, BoardKind::Dense).unwrap();
        for (token, column) in [
            ('O', 0),
            ('X', 0),
            ('O', 0),
            ('X', 1),
            ('O', 1),
            ('O', 1),
            ('X', 2),
            ('X', 2),
        ] {
            board.place_token(token, column).unwrap();
        }
        let mut session = Session::new(board, 2).unwrap();
        let directives = session.handle_column_select(2);
        assert_eq!(
            messages(&directives),
            vec!["Tie game! Press any button to start a new game."]
        );
        assert!(session.is_over());
        // The line is there, but the tie was reported instead.
        assert!(session.board().check_for_win(2));
    }

    #[test]
    fn test_acknowledging_end_requests_new_game() {
        let mut session = session(3, 4, 3, 2);
        for column in [0, 1, 0, 1, 0] {
            session.handle_column_select(column);
        }
        assert!(session.is_over());
        let directives = session.handle_column_select(2);
        assert_eq!(directives, vec![Directive::StartNewGame]);
        assert!(!session.is_over());
        assert_eq!(session.current_token(), 'X');
        // The acknowledging click placed nothing.
        assert_eq!(
            session.board().whats_at_pos(BoardPosition::new(0, 2)),
            BLANK
        );
    }

    #[test]
    fn test_turn_advances_past_winner() {
        // The original advances the turn even on a game-ending move; only
        // the turn message is suppressed.
        let mut session = session(3, 4, 3, 2);
        for column in [0, 1, 0, 1, 0] {
            session.handle_column_select(column);
        }
        assert!(session.is_over());
        assert_eq!(session.current_token(), 'O');
    }

    mod properties {
        use quickcheck::quickcheck;

        use super::*;
        use crate::game::arbitrary::PlacementSequence;

        quickcheck! {
            // While nobody has won, n non-ending moves bring the turn back
            // to the player who made the first of them.
            fn turn_rotation_is_cyclic(input: PlacementSequence, players: usize) -> bool {
                let players = MIN_PLAYERS + players % (MAX_PLAYERS - MIN_PLAYERS + 1);
                let board = create_board(input.rows, input.columns, input.win_length, BoardKind::Sparse).unwrap();
                let mut session = Session::new(board, players).unwrap();
                let mut moves_accepted = 0usize;
                for &(_, column) in &input.moves {
                    if session.is_over() {
                        break;
                    }
                    let before = session.current_token();
                    let directives = session.handle_column_select(column);
                    let placed = directives
                        .iter()
                        .any(|d| matches!(d, Directive::SetMarker { .. }));
                    if placed {
                        moves_accepted += 1;
                    } else if session.current_token() != before {
                        // A rejected move must not advance the turn.
                        return false;
                    }
                }
                if session.is_over() {
                    return true;
                }
                session.current_token() == PLAYER_TOKENS[moves_accepted % players]
            }
        }
    }
}
