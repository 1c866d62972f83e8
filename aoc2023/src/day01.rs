use crate::error::malformed;
use crate::Result;

const WORDS: [&str; 9] = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];

/// The digit starting at byte `ix`, if any. Spelled-out digits only count
/// when `spelled` is set.
fn digit_at(line: &str, ix: usize, spelled: bool) -> Option<u32> {
    let rest = &line.as_bytes()[ix ..];
    match rest.first() {
        Some(b @ b'0' ..= b'9') => Some((b - b'0') as u32),
        Some(_) if spelled => WORDS.iter().position(|w| rest.starts_with(w.as_bytes())).map(|ix| ix as u32 + 1),
        _ => None,
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let spelled = part == 2;
    let mut sum = 0;
    for line in input.trim().lines() {
        let first = (0 .. line.len()).find_map(|ix| digit_at(line, ix, spelled));
        let last = (0 .. line.len()).rev().find_map(|ix| digit_at(line, ix, spelled));
        let (Some(first), Some(last)) = (first, last) else {
            return Err(malformed(line, "no digit in line"));
        };
        sum += first * 10 + last;
    }
    Ok(sum.to_string())
}
