use crate::error::malformed;
use crate::{PuzzleError, Result};
use arrayvec::ArrayVec;

const LINES: [u32; 10] = [
    0b_00000_00000_00000_00000_11111,
    0b_00000_00000_00000_11111_00000,
    0b_00000_00000_11111_00000_00000,
    0b_00000_11111_00000_00000_00000,
    0b_11111_00000_00000_00000_00000,
    0b_00001_00001_00001_00001_00001,
    0b_00010_00010_00010_00010_00010,
    0b_00100_00100_00100_00100_00100,
    0b_01000_01000_01000_01000_01000,
    0b_10000_10000_10000_10000_10000,
];

type Board = ArrayVec<u8, 25>;

/// Returns the draw index at which `board` completes a row or column,
/// along with its score.
fn play(board: &Board, draws: &[u8]) -> Option<(usize, usize)> {
    let mut seen = 0u32;
    for (t, &draw) in draws.iter().enumerate() {
        let Some(ix) = board.iter().position(|&b| b == draw) else {continue};
        seen |= 1 << ix;
        if LINES.iter().any(|&line| seen & line == line) {
            let unmarked = (0 .. 25).filter(|&ix| seen & (1 << ix) == 0)
                .map(|ix| board[ix] as usize).sum::<usize>();
            return Some((t, unmarked * draw as usize));
        }
    }
    None
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let (draws_line, boards_str) = input.trim().split_once('\n')
        .ok_or_else(|| malformed(input, "expected draws followed by boards"))?;
    let draws = draws_line.trim().split(',')
        .map(|s| s.parse::<u8>())
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut best: Option<(usize, usize)> = None;
    for block in boards_str.split("\n\n").map(str::trim).filter(|b| !b.is_empty()) {
        let mut board = Board::new();
        for s in block.split_ascii_whitespace() {
            board.try_push(s.parse()?).map_err(|_| malformed(block, "board larger than 5x5"))?;
        }
        if !board.is_full() {
            return Err(malformed(block, "board smaller than 5x5"));
        }
        let Some((t, score)) = play(&board, &draws) else {continue};
        let better = match best {
            None => true,
            Some((best_t, _)) => if part == 1 {t < best_t} else {t > best_t},
        };
        if better {best = Some((t, score))};
    }
    best.map(|(_, score)| score.to_string())
        .ok_or(PuzzleError::NoAnswer("no board ever wins"))
}
