use crate::Result;
use itertools::Itertools;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let depths = input.trim().lines()
        .map(|line| line.trim().parse::<u32>())
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let increases = if part == 1 {
        depths.iter().tuple_windows().filter(|(a, b)| b > a).count()
    } else {
        // windows [a, b, c] and [b, c, d] share b and c
        depths.iter().tuple_windows().filter(|(a, _, _, d)| d > a).count()
    };
    Ok(increases.to_string())
}
