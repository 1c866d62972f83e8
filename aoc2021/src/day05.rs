use crate::error::malformed;
use crate::Result;
use regex::Regex;
use rustc_hash::FxHashMap;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let re = Regex::new(r"^(\d+),(\d+) -> (\d+),(\d+)$").unwrap();
    let mut covered: FxHashMap<(i32, i32), u32> = FxHashMap::default();

    for line in input.trim().lines() {
        let caps = re.captures(line.trim()).ok_or_else(|| malformed(line, "expected x1,y1 -> x2,y2"))?;
        let [x1, y1, x2, y2] = [&caps[1], &caps[2], &caps[3], &caps[4]].map(str::parse::<i32>);
        let (x1, y1, x2, y2) = (x1?, y1?, x2?, y2?);
        let (dx, dy) = ((x2 - x1).signum(), (y2 - y1).signum());
        if dx != 0 && dy != 0 {
            if part == 1 {continue};
            if (x2 - x1).abs() != (y2 - y1).abs() {
                return Err(malformed(line, "diagonal is not at 45 degrees"));
            }
        }
        let len = (x2 - x1).abs().max((y2 - y1).abs());
        for i in 0 ..= len {
            *covered.entry((x1 + i * dx, y1 + i * dy)).or_insert(0) += 1;
        }
    }
    Ok(covered.values().filter(|&&n| n >= 2).count().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2
";

    #[test]
    fn straight_lines_only() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "5");
    }

    #[test]
    fn with_diagonals() {
        assert_eq!(solve(2, EXAMPLE).unwrap(), "12");
    }

    #[test]
    fn single_point_segment() {
        assert_eq!(solve(1, "1,1 -> 1,1\n1,1 -> 1,1\n").unwrap(), "1");
    }
}
