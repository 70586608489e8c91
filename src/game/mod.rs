pub(crate) mod board;
pub(crate) mod dense;
pub(crate) mod error;
mod game;
mod input;
pub(crate) mod position;
pub(crate) mod session;
pub(crate) mod sparse;

#[cfg(test)]
mod arbitrary;

pub use game::Game;
