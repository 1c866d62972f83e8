use crate::Result;
use rustc_hash::FxHashMap;

struct PartNumber {
    value: u32,
    row: usize,
    start: usize,
    end: usize,
}

fn numbers(grid: &[&[u8]]) -> Vec<PartNumber> {
    let mut found = vec![];
    for (row, line) in grid.iter().enumerate() {
        let mut ci = 0;
        while ci < line.len() {
            if !line[ci].is_ascii_digit() {ci += 1; continue};
            let start = ci;
            let mut value = 0;
            while ci < line.len() && line[ci].is_ascii_digit() {
                value = value * 10 + (line[ci] - b'0') as u32;
                ci += 1;
            }
            found.push(PartNumber {value, row, start, end: ci});
        }
    }
    found
}

/// Every cell touching the number, diagonals included, that holds a symbol.
fn adjacent_symbols<'a>(grid: &'a [&[u8]], n: &PartNumber) -> impl Iterator<Item = (usize, usize, u8)> + 'a {
    let (row, start, end) = (n.row, n.start, n.end);
    (row.saturating_sub(1) ..= row + 1).flat_map(move |ri|
        (start.saturating_sub(1) ..= end).filter_map(move |ci| {
            let &cell = grid.get(ri)?.get(ci)?;
            (cell != b'.' && !cell.is_ascii_digit()).then_some((ri, ci, cell))
        })
    )
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let grid = input.trim().lines().map(|line| line.trim().as_bytes()).collect::<Vec<_>>();
    let numbers = numbers(&grid);

    if part == 1 {
        return Ok(numbers.iter()
            .filter(|n| adjacent_symbols(&grid, n).next().is_some())
            .map(|n| n.value)
            .sum::<u32>().to_string());
    }

    let mut gears: FxHashMap<(usize, usize), Vec<u32>> = FxHashMap::default();
    for n in &numbers {
        for (ri, ci, _) in adjacent_symbols(&grid, n).filter(|s| s.2 == b'*') {
            gears.entry((ri, ci)).or_default().push(n.value);
        }
    }
    Ok(gears.values()
        .filter(|parts| parts.len() == 2)
        .map(|parts| parts[0] as u64 * parts[1] as u64)
        .sum::<u64>().to_string())
}
