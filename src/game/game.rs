use super::{
    board::{create_board, BoardKind, GameBoard},
    error::GameResult,
    input::InputValue,
    session::{Directive, Session},
};

/// Terminal front end for a game.
///
/// Owns a [`Session`] and plays the excluded presentation layer's part:
/// it reads column selections from stdin, feeds them to the session and
/// renders the directives that come back. When a finished game is
/// acknowledged it rebuilds the board and session with the same
/// configuration.
pub struct Game {
    rows: usize,
    columns: usize,
    win_length: usize,
    num_players: usize,
    kind: BoardKind,
    session: Session,
}

impl Game {
    /// Create a new game manager instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions, win length or player count fall
    /// outside the allowed bounds.
    pub fn new(
        rows: usize,
        columns: usize,
        win_length: usize,
        num_players: usize,
        kind: BoardKind,
    ) -> GameResult<Self> {
        let board = create_board(rows, columns, win_length, kind)?;
        let session = Session::new(board, num_players)?;
        Ok(Self {
            rows,
            columns,
            win_length,
            num_players,
            kind,
            session,
        })
    }

    // Replace the finished session with a fresh one. The parameters were
    // validated when the game was created, so this cannot fail in practice.
    fn reset(&mut self) -> GameResult<()> {
        let board = create_board(self.rows, self.columns, self.win_length, self.kind)?;
        self.session = Session::new(board, self.num_players)?;
        Ok(())
    }

    /// Run the game loop until a player quits.
    pub fn start(&mut self) {
        print!("{}", self.session.board().render());
        println!("It is {}'s turn.", self.session.current_token());

        loop {
            match InputValue::get() {
                Ok(InputValue::Col(column)) => {
                    let directives = self.session.handle_column_select(column);
                    for directive in directives {
                        match directive {
                            Directive::SetMarker { .. } => {
                                print!("{}", self.session.board().render());
                            }
                            Directive::SetMessage(text) => println!("{text}"),
                            Directive::StartNewGame => {
                                if let Err(err) = self.reset() {
                                    log::error!("failed to start a new game: {err}");
                                    return;
                                }
                                print!("{}", self.session.board().render());
                                println!("It is {}'s turn.", self.session.current_token());
                            }
                        }
                    }
                }
                Ok(InputValue::Help) => {
                    println!("Commands");
                    println!(
                        "  0..{}\t\tdrop your token in that column",
                        self.session.board().num_columns() - 1
                    );
                    println!("  help\t\tshow this page");
                    println!("  quit\t\tquit");

                    println!("Aliases");
                    println!("  h, ?\t\tshort for help");
                    println!("  exit, stop, q, e, s\tshort for quit");
                }
                Ok(InputValue::Quit) => break,
                Err(err) => println!("Invalid input: {err}"),
            }
        }
    }
}
