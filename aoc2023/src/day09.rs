use crate::{PuzzleError, Result};
use itertools::Itertools;

/// Next value of the sequence: the sum of the last element of every row of
/// the difference pyramid.
fn extrapolate(mut row: Vec<i64>) -> i64 {
    let mut next = 0;
    while row.iter().any(|&x| x != 0) {
        next += row[row.len() - 1];
        row = row.iter().tuple_windows().map(|(a, b)| b - a).collect();
    }
    next
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut sum = 0;
    for line in input.trim().lines() {
        let mut history = line.split_whitespace().map(str::parse::<i64>).collect::<std::result::Result<Vec<_>, _>>()?;
        if history.is_empty() {
            return Err(PuzzleError::NoAnswer("empty history"));
        }
        // extrapolating backwards is extrapolating the reversed sequence
        if part == 2 {history.reverse()};
        sum += extrapolate(history);
    }
    Ok(sum.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
0 3 6 9 12 15
1 3 6 10 15 21
10 13 16 21 30 45
";

    #[test]
    fn next_values() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "114");
    }

    #[test]
    fn previous_values() {
        assert_eq!(solve(2, EXAMPLE).unwrap(), "2");
    }

    #[test]
    fn negative_sequence() {
        assert_eq!(extrapolate(vec![-1, -4, -9]), -16);
    }
}
