use crate::error::malformed;
use crate::{PuzzleError, Result};
use bitvec::prelude::*;

struct Heightmap {
    rows: usize,
    cols: usize,
    heights: Vec<u8>,
}

impl Heightmap {
    fn parse(input: &str) -> Result<Heightmap> {
        let lines = input.trim().lines().map(str::trim).collect::<Vec<_>>();
        let cols = lines.first().map_or(0, |l| l.len());
        let mut heights = Vec::with_capacity(lines.len() * cols);
        for line in &lines {
            if line.len() != cols {
                return Err(malformed(line, "rows differ in length"));
            }
            for b in line.bytes() {
                if !b.is_ascii_digit() {
                    return Err(malformed(line, "heights are single digits"));
                }
                heights.push(b - b'0');
            }
        }
        Ok(Heightmap {rows: lines.len(), cols, heights})
    }

    fn neighbours(&self, ix: usize) -> impl Iterator<Item = usize> {
        let (r, c) = (ix / self.cols, ix % self.cols);
        let cols = self.cols;
        [
            (r > 0).then(|| ix - cols),
            (r + 1 < self.rows).then(|| ix + cols),
            (c > 0).then(|| ix - 1),
            (c + 1 < cols).then(|| ix + 1),
        ].into_iter().flatten()
    }

    fn low_points(&self) -> impl Iterator<Item = usize> + '_ {
        (0 .. self.heights.len()).filter(move |&ix|
            self.neighbours(ix).all(|n| self.heights[n] > self.heights[ix])
        )
    }

    fn basin_size(&self, low: usize, seen: &mut BitVec) -> usize {
        let mut stack = vec![low];
        seen.set(low, true);
        let mut size = 0;
        while let Some(ix) = stack.pop() {
            size += 1;
            for n in self.neighbours(ix) {
                if self.heights[n] < 9 && !seen[n] {
                    seen.set(n, true);
                    stack.push(n);
                }
            }
        }
        size
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let map = Heightmap::parse(input)?;
    if part == 1 {
        return Ok(map.low_points().map(|ix| map.heights[ix] as u32 + 1).sum::<u32>().to_string());
    }

    let mut seen = bitvec![0; map.heights.len()];
    let mut sizes = map.low_points().collect::<Vec<_>>().into_iter()
        .map(|low| map.basin_size(low, &mut seen))
        .collect::<Vec<_>>();
    if sizes.len() < 3 {
        return Err(PuzzleError::NoAnswer("fewer than three basins"));
    }
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    Ok(sizes[.. 3].iter().product::<usize>().to_string())
}
