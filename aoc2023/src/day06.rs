use crate::error::malformed;
use crate::Result;

/// Number of whole-millisecond hold times whose distance beats `record`.
fn ways_to_win(time: u64, record: u64) -> u64 {
    let beats = |hold: u64| hold * (time - hold) > record;
    let disc = (time * time) as f64 - 4.0 * record as f64;
    if disc < 0.0 {return 0};
    let mid = time / 2;
    if !beats(mid) {return 0};
    // the float root is only an estimate; nudge it onto the exact boundary
    let mut lo = ((time as f64 - disc.sqrt()) / 2.0).max(0.0) as u64;
    while lo > 0 && beats(lo) {lo -= 1};
    while !beats(lo) {lo += 1};
    // distances are symmetric around time / 2
    time - 2 * lo + 1
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut lines = input.trim().lines();
    let mut row = |prefix: &str| -> Result<Vec<u64>> {
        let line = lines.next().unwrap_or_default();
        let nums = line.trim().strip_prefix(prefix).ok_or_else(|| malformed(line, "unexpected row label"))?;
        if part == 1 {
            Ok(nums.split_whitespace().map(str::parse::<u64>).collect::<std::result::Result<Vec<_>, _>>()?)
        } else {
            Ok(vec![nums.replace(' ', "").parse()?])
        }
    };
    let times = row("Time:")?;
    let records = row("Distance:")?;
    if times.len() != records.len() {
        return Err(malformed(input, "times and distances differ in count"));
    }
    Ok(times.iter().zip(&records).map(|(&t, &d)| ways_to_win(t, d)).product::<u64>().to_string())
}
