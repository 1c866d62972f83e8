use crate::error::malformed;
use crate::Result;
use arrayvec::ArrayVec;

fn matches(line: &str) -> Result<usize> {
    let (_, numbers) = line.split_once(':').ok_or_else(|| malformed(line, "missing ':'"))?;
    let (winning, have) = numbers.split_once('|').ok_or_else(|| malformed(line, "missing '|'"))?;
    let mut winning_numbers = ArrayVec::<u8, 32>::new();
    for s in winning.split_whitespace() {
        winning_numbers.try_push(s.parse()?).map_err(|_| malformed(line, "too many winning numbers"))?;
    }
    let mut count = 0;
    for s in have.split_whitespace() {
        if winning_numbers.contains(&s.parse()?) {count += 1};
    }
    Ok(count)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let matches = input.trim().lines().map(matches).collect::<Result<Vec<_>>>()?;
    if part == 1 {
        return Ok(matches.iter().map(|&m| if m == 0 {0} else {1u64 << (m - 1)}).sum::<u64>().to_string());
    }

    let mut copies = vec![1u64; matches.len()];
    for (card, &m) in matches.iter().enumerate() {
        let won = copies[card];
        for later in &mut copies[card + 1 .. (card + 1 + m).min(matches.len())] {
            *later += won;
        }
    }
    Ok(copies.iter().sum::<u64>().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

    #[test]
    fn points() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "13");
    }

    #[test]
    fn won_copies() {
        assert_eq!(solve(2, EXAMPLE).unwrap(), "30");
    }
}
