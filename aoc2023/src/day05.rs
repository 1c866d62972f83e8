use crate::error::malformed;
use crate::{PuzzleError, Result};
use itertools::Itertools;
use std::ops::Range;

struct Shift {
    src: Range<u64>,
    dst: u64,
}

/// One `x-to-y map:` block, its ranges sorted by source start.
struct Mapping(Vec<Shift>);

impl Mapping {
    fn parse(block: &str) -> Result<Mapping> {
        let mut shifts = vec![];
        for line in block.lines().skip(1) {
            let nums = line.split_whitespace().map(str::parse::<u64>).collect::<std::result::Result<Vec<_>, _>>()?;
            let [dst, src, len] = nums[..] else {
                return Err(malformed(line, "expected destination, source and length"));
            };
            shifts.push(Shift {src: src .. src + len, dst});
        }
        shifts.sort_unstable_by_key(|s| s.src.start);
        Ok(Mapping(shifts))
    }

    /// Maps a whole interval, splitting it wherever a source range begins
    /// or ends.
    fn map_range(&self, mut r: Range<u64>, out: &mut Vec<Range<u64>>) {
        for s in &self.0 {
            if r.is_empty() {return};
            if s.src.end <= r.start {continue};
            if r.start < s.src.start {
                let gap_end = r.end.min(s.src.start);
                out.push(r.start .. gap_end);
                r.start = gap_end;
                if r.is_empty() {return};
            }
            let end = r.end.min(s.src.end);
            out.push(r.start - s.src.start + s.dst .. end - s.src.start + s.dst);
            r.start = end;
        }
        if !r.is_empty() {out.push(r)};
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut blocks = input.trim().split("\n\n");
    let seeds_line = blocks.next().unwrap_or_default();
    let seeds = seeds_line.strip_prefix("seeds:")
        .ok_or_else(|| malformed(seeds_line, "expected seeds: ..."))?
        .split_whitespace().map(str::parse::<u64>).collect::<std::result::Result<Vec<_>, _>>()?;
    let mappings = blocks.map(Mapping::parse).collect::<Result<Vec<_>>>()?;

    let mut ranges = if part == 1 {
        seeds.iter().map(|&s| s .. s + 1).collect::<Vec<_>>()
    } else {
        if seeds.len() % 2 != 0 {
            return Err(malformed(seeds_line, "seed ranges come in pairs"));
        }
        seeds.iter().tuples().map(|(&start, &len)| start .. start + len).collect()
    };
    for mapping in &mappings {
        let mut next = Vec::with_capacity(ranges.len());
        for r in ranges {
            mapping.map_range(r, &mut next);
        }
        ranges = next;
    }

    ranges.iter().filter(|r| !r.is_empty()).map(|r| r.start).min()
        .map(|loc| loc.to_string())
        .ok_or(PuzzleError::NoAnswer("no seeds"))
}
