use std::str::FromStr;

use super::error::{Error, GameResult};

/// The different kinds of input the terminal loop can receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum InputValue {
    Col(usize),
    Quit,
    Help,
}

impl InputValue {
    /// Attempt to get input from stdin.
    pub(super) fn get() -> GameResult<Self> {
        let mut buf = String::new();

        std::io::stdin()
            .read_line(&mut buf)
            .expect("Failed to read stdin");
        InputValue::from_str(&buf)
    }
}

impl FromStr for InputValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().trim() {
            "stop" | "exit" | "quit" | "q" | "e" | "s" => Ok(Self::Quit),
            "help" | "h" | "?" => Ok(Self::Help),
            str => match str.parse::<usize>() {
                Ok(column) => Ok(Self::Col(column)),
                Err(_) => Err(Error::InvalidInput(str.to_string())),
            },
        }
    }
}
