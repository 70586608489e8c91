use connectx::{BoardKind, Game};

const ROWS: usize = 6;
const COLUMNS: usize = 7;
const WIN_LENGTH: usize = 4;
const PLAYERS: usize = 2;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .init();
    let mut game = Game::new(ROWS, COLUMNS, WIN_LENGTH, PLAYERS, BoardKind::Dense).unwrap();
    game.start();
}
