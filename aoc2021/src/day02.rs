use crate::error::malformed;
use crate::Result;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut x = 0i64;
    let mut y = 0i64;
    let mut aim = 0i64;
    for line in input.trim().lines() {
        let (word, num) = line.split_once(' ').ok_or_else(|| malformed(line, "expected a direction and a distance"))?;
        let num: i64 = num.trim().parse()?;
        match (part, word) {
            (1, "forward") => x += num,
            (1, "down") => y += num,
            (1, "up") => y -= num,
            (_, "forward") => {x += num; y += num * aim},
            (_, "down") => aim += num,
            (_, "up") => aim -= num,
            _ => return Err(malformed(line, "unknown direction")),
        }
    }
    Ok((x * y).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
forward 5
down 5
forward 8
up 3
down 8
forward 2
";

    #[test]
    fn plain_moves() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "150");
    }

    #[test]
    fn moves_with_aim() {
        assert_eq!(solve(2, EXAMPLE).unwrap(), "900");
    }

    #[test]
    fn unknown_direction() {
        assert!(matches!(solve(1, "backward 3"), Err(crate::PuzzleError::Malformed { .. })));
    }
}
