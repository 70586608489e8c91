use quickcheck::{Arbitrary, Gen};

use super::session::PLAYER_TOKENS;

/// A valid board configuration plus a sequence of column selections.
///
/// Dimensions stay small so the quickcheck properties explore deep boards
/// quickly; columns are always in range, tokens come from the reserved
/// alphabet. Moves into full columns are allowed and left to the property
/// under test to filter or assert on.
#[derive(Clone, Debug)]
pub struct PlacementSequence {
    pub rows: usize,
    pub columns: usize,
    pub win_length: usize,
    pub moves: Vec<(char, usize)>,
}

impl Arbitrary for PlacementSequence {
    fn arbitrary(g: &mut Gen) -> Self {
        let rows = 3 + usize::arbitrary(g) % 5;
        let columns = 3 + usize::arbitrary(g) % 5;
        let win_length = 3 + usize::arbitrary(g) % 3;

        let count = usize::arbitrary(g) % (rows * columns);
        let mut moves = Vec::with_capacity(count);
        for _ in 0..count {
            let token = *g.choose(&PLAYER_TOKENS[..3]).unwrap();
            moves.push((token, usize::arbitrary(g) % columns));
        }

        PlacementSequence {
            rows,
            columns,
            win_length,
            moves,
        }
    }
}
