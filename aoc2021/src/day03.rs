use crate::error::malformed;
use crate::{PuzzleError, Result};
use tracing::debug;

fn ones_at(nums: &[&[u8]], ix: usize) -> usize {
    nums.iter().filter(|n| n[ix] == b'1').count()
}

/// Filters `nums` column by column until one remains. `keep_common` picks
/// the oxygen criterion (most common, ties to 1), otherwise CO2 (least
/// common, ties to 0).
fn rating(mut nums: Vec<&[u8]>, keep_common: bool) -> Result<u64> {
    let n_bits = nums.first().map_or(0, |n| n.len());
    for ix in 0 .. n_bits {
        if nums.len() == 1 {break};
        let n_ones = ones_at(&nums, ix);
        if n_ones == 0 || n_ones == nums.len() {continue};
        let ones_common = n_ones * 2 >= nums.len();
        let to_retain = if ones_common == keep_common {b'1'} else {b'0'};
        nums.retain(|n| n[ix] == to_retain);
    }
    match nums[..] {
        [n] => Ok(u64::from_str_radix(std::str::from_utf8(n).unwrap_or_default(), 2)?),
        _ => Err(PuzzleError::NoAnswer("diagnostic filter did not narrow down to one number")),
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let nums = input.trim().lines().map(|line| line.trim().as_bytes()).collect::<Vec<_>>();
    let n_bits = nums.first().map_or(0, |n| n.len());
    if let Some(bad) = nums.iter().find(|n| n.len() != n_bits || n.iter().any(|&b| b != b'0' && b != b'1')) {
        return Err(malformed(&String::from_utf8_lossy(bad), "expected binary numbers of equal width"));
    }
    if n_bits > 63 {
        return Err(malformed(&String::from_utf8_lossy(nums[0]), "numbers wider than 63 bits"));
    }

    if part == 1 {
        let gamma = (0 .. n_bits).fold(0u64, |a, ix| 2 * a + (ones_at(&nums, ix) * 2 >= nums.len()) as u64);
        let eps = (1 << n_bits) - 1 - gamma;
        debug!("gamma: {:b}, eps: {:b}", gamma, eps);
        Ok((gamma * eps).to_string())
    } else {
        let oxy = rating(nums.clone(), true)?;
        let co2 = rating(nums, false)?;
        debug!("oxygen: {}, co2: {}", oxy, co2);
        Ok((oxy * co2).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
00100
11110
10110
10111
10101
01111
00111
11100
10000
11001
00010
01010
";

    #[test]
    fn power_consumption() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "198");
    }

    #[test]
    fn life_support() {
        assert_eq!(solve(2, EXAMPLE).unwrap(), "230");
    }

    #[test]
    fn too_wide() {
        let wide = "1".repeat(64);
        assert!(matches!(solve(1, &wide), Err(PuzzleError::Malformed { .. })));
        assert!(matches!(solve(2, &wide), Err(PuzzleError::Malformed { .. })));
        assert_eq!(solve(1, &"1".repeat(63)).unwrap(), "0");
    }

    #[test]
    fn ragged_input() {
        assert!(solve(1, "0101\n011\n").is_err());
    }
}
