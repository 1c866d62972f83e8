use crate::error::malformed;
use crate::Result;

fn segments(word: &str) -> Result<u8> {
    word.bytes().try_fold(0, |a, b| match b {
        b'a' ..= b'g' => Ok(a | 1 << (b - b'a')),
        _ => Err(malformed(word, "segments are named a through g")),
    })
}

fn is_subset(small: u8, big: u8) -> bool {small & big == small}

/// Works out which segment pattern shows which digit; `None` if the ten
/// patterns do not fit a seven-segment display.
fn decode(patterns: &[u8]) -> Option<[u8; 10]> {
    let with_len = |n: u32| patterns.iter().copied().filter(move |p| p.count_ones() == n);
    let one = with_len(2).next()?;
    let four = with_len(4).next()?;
    let seven = with_len(3).next()?;
    let eight = with_len(7).next()?;
    let nine = with_len(6).find(|&p| is_subset(four, p))?;
    let zero = with_len(6).find(|&p| p != nine && is_subset(one, p))?;
    let six = with_len(6).find(|&p| p != nine && p != zero)?;
    let three = with_len(5).find(|&p| is_subset(one, p))?;
    let five = with_len(5).find(|&p| p != three && is_subset(p, six))?;
    let two = with_len(5).find(|&p| p != three && p != five)?;
    Some([zero, one, two, three, four, five, six, seven, eight, nine])
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut total = 0u64;
    for line in input.trim().lines() {
        let (signals, outputs) = line.split_once('|').ok_or_else(|| malformed(line, "missing '|'"))?;
        let outputs = outputs.split_whitespace().map(segments).collect::<Result<Vec<_>>>()?;
        if part == 1 {
            total += outputs.iter().filter(|o| matches!(o.count_ones(), 2 | 3 | 4 | 7)).count() as u64;
            continue;
        }
        let patterns = signals.split_whitespace().map(segments).collect::<Result<Vec<_>>>()?;
        if patterns.len() != 10 {
            return Err(malformed(line, "expected ten patterns"));
        }
        let digits = decode(&patterns).ok_or_else(|| malformed(line, "patterns do not form ten digits"))?;
        let mut value = 0;
        for o in outputs {
            let digit = digits.iter().position(|&d| d == o)
                .ok_or_else(|| malformed(line, "output is not one of the patterns"))?;
            value = value * 10 + digit as u64;
        }
        total += value;
    }
    Ok(total.to_string())
}
