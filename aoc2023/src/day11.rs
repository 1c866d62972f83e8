use crate::Result;
use bitvec::prelude::*;
use itertools::Itertools;

/// Sum of shortest paths between every pair of galaxies, each empty row and
/// column counting `expansion` times.
fn distances(input: &str, expansion: u64) -> u64 {
    let image = input.trim().lines().map(|line| line.trim().as_bytes()).collect::<Vec<_>>();
    let width = image.iter().map(|row| row.len()).max().unwrap_or(0);
    let mut busy_rows = bitvec![0; image.len()];
    let mut busy_cols = bitvec![0; width];
    let mut galaxies = vec![];
    for (ri, row) in image.iter().enumerate() {
        for (ci, _) in row.iter().enumerate().filter(|&(_, &b)| b == b'#') {
            busy_rows.set(ri, true);
            busy_cols.set(ci, true);
            galaxies.push((ri, ci));
        }
    }

    // expanded coordinate of every original row and column
    let stretch = |busy: &BitVec| busy.iter().scan(0, |at, b| {
        let here = *at;
        *at += if *b {1} else {expansion};
        Some(here)
    }).collect::<Vec<u64>>();
    let row_at = stretch(&busy_rows);
    let col_at = stretch(&busy_cols);

    galaxies.iter()
        .map(|&(r, c)| (row_at[r], col_at[c]))
        .tuple_combinations()
        .map(|((r1, c1), (r2, c2))| r1.abs_diff(r2) + c1.abs_diff(c2))
        .sum()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    Ok(distances(input, if part == 1 {2} else {1_000_000}).to_string())
}
