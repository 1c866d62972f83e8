use crate::{PuzzleError, Result};
use itertools::{Itertools, MinMaxResult};

pub fn solve(part: u8, input: &str) -> Result<String> {
    let crabs = input.trim().split(',')
        .map(|s| s.trim().parse::<i64>())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let (lo, hi) = match crabs.iter().minmax() {
        MinMaxResult::NoElements => return Err(PuzzleError::NoAnswer("no crabs")),
        MinMaxResult::OneElement(&x) => (x, x),
        MinMaxResult::MinMax(&lo, &hi) => (lo, hi),
    };

    let fuel = |dist: i64| if part == 1 {dist} else {dist * (dist + 1) / 2};
    (lo ..= hi)
        .map(|target| crabs.iter().map(|&x| fuel((x - target).abs())).sum::<i64>())
        .min()
        .map(|f| f.to_string())
        .ok_or(PuzzleError::NoAnswer("no crabs"))
}
