/// All the possible errors produced by the game core.
///
/// The configuration variants (`InvalidDimensions`, `InvalidWinLength`,
/// `InvalidPlayerCount`) abort game creation. `InvalidColumn` and
/// `ColumnFull` are recoverable move errors that [`Session`](crate::Session)
/// converts into user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Board dimensions outside the allowed range.
    InvalidDimensions {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        columns: usize,
    },
    /// Win length outside the allowed range.
    InvalidWinLength(usize),
    /// Player count outside the allowed range.
    InvalidPlayerCount(usize),
    /// A column index beyond the right edge of the board was selected.
    InvalidColumn(usize),
    /// The selected column has no blank cell left.
    ColumnFull(usize),
    /// A line of user input that could not be parsed.
    InvalidInput(String),
}

/// Result type making use of custom errors.
pub type GameResult<T> = Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidDimensions { rows, columns } => {
                write!(f, "board dimensions {rows}x{columns} are out of range")
            }
            Error::InvalidWinLength(len) => write!(f, "win length {len} is out of range"),
            Error::InvalidPlayerCount(count) => write!(f, "player count {count} is out of range"),
            Error::InvalidColumn(column) => write!(f, "column {column} does not exist"),
            Error::ColumnFull(column) => write!(f, "column {column} is already full"),
            Error::InvalidInput(input) => write!(f, "unrecognized input: {input}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            rows: 2,
            columns: 150,
        };
        assert_eq!(err.to_string(), "board dimensions 2x150 are out of range");
        assert_eq!(
            Error::ColumnFull(3).to_string(),
            "column 3 is already full"
        );
        assert_eq!(
            Error::InvalidInput("xyzzy".to_string()).to_string(),
            "unrecognized input: xyzzy"
        );
    }
}
