use crate::error::malformed;
use crate::{PuzzleError, Result};

const NORTH: (isize, isize) = (-1, 0);
const SOUTH: (isize, isize) = (1, 0);
const WEST: (isize, isize) = (0, -1);
const EAST: (isize, isize) = (0, 1);

fn openings(tile: u8) -> &'static [(isize, isize)] {
    match tile {
        b'|' => &[NORTH, SOUTH],
        b'-' => &[WEST, EAST],
        b'L' => &[NORTH, EAST],
        b'J' => &[NORTH, WEST],
        b'7' => &[SOUTH, WEST],
        b'F' => &[SOUTH, EAST],
        _ => &[],
    }
}

/// Positions along the loop through `S`, starting at `S`.
fn find_loop(grid: &[&[u8]]) -> Result<Vec<(isize, isize)>> {
    let tile_at = |(r, c): (isize, isize)| -> u8 {
        if r < 0 || c < 0 {return b'.'};
        grid.get(r as usize).and_then(|row| row.get(c as usize)).copied().unwrap_or(b'.')
    };
    let start = grid.iter().enumerate()
        .find_map(|(ri, row)| row.iter().position(|&t| t == b'S').map(|ci| (ri as isize, ci as isize)))
        .ok_or(PuzzleError::NoAnswer("no start tile"))?;

    let mut dir = [NORTH, EAST, SOUTH, WEST].into_iter()
        .find(|&(dr, dc)| openings(tile_at((start.0 + dr, start.1 + dc))).contains(&(-dr, -dc)))
        .ok_or(PuzzleError::NoAnswer("start tile has no connecting pipe"))?;
    let mut pos = start;
    let mut path = vec![start];
    loop {
        pos = (pos.0 + dir.0, pos.1 + dir.1);
        if pos == start {return Ok(path)};
        let exits = openings(tile_at(pos));
        let came_from = (-dir.0, -dir.1);
        if !exits.contains(&came_from) {
            return Err(PuzzleError::NoAnswer("pipe loop is broken"));
        }
        dir = exits.iter().copied().find(|&d| d != came_from).unwrap_or(came_from);
        path.push(pos);
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let grid = input.trim().lines().map(|line| line.trim().as_bytes()).collect::<Vec<_>>();
    if let Some(bad) = grid.iter().find(|row| row.iter().any(|t| !b"|-LJ7F.S".contains(t))) {
        return Err(malformed(&String::from_utf8_lossy(bad), "unknown tile"));
    }
    let path = find_loop(&grid)?;
    if part == 1 {
        return Ok((path.len() / 2).to_string());
    }

    // shoelace for the area, then Pick's theorem for the interior points
    let twice_area = path.iter().zip(path.iter().cycle().skip(1))
        .map(|(&(r1, c1), &(r2, c2))| r1 * c2 - r2 * c1)
        .sum::<isize>().unsigned_abs();
    Ok((twice_area / 2 + 1 - path.len() / 2).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = "\
-L|F7
7S-7|
L|7||
-L-J|
L|-JF
";

    const WINDING: &str = "\
7-F7-
.FJ|7
SJLL7
|F--J
LJ.LJ
";

    #[test]
    fn farthest_point() {
        assert_eq!(solve(1, SQUARE).unwrap(), "4");
        assert_eq!(solve(1, WINDING).unwrap(), "8");
    }

    #[test]
    fn enclosed_tiles() {
        let input = "\
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
";
        assert_eq!(solve(2, input).unwrap(), "4");
        assert_eq!(solve(2, SQUARE).unwrap(), "1");
    }

    #[test]
    fn loose_pipes_inside_the_loop() {
        let scattered = "\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
";
        let tangled = "\
FF7FSF7F7F7F7F7F---7
L|LJ||||||||||||F--J
FL-7LJLJ||||||LJL-77
F--JF--7||LJLJ7F7FJ-
L---JF-JLJ.||-FJLJJ7
|F|F-JF---7F7-L7L|7|
|FFJF7L7F-JF7|JL---7
7-L-JL7||F7|L7F-7F7|
L.L7LFJ|||||FJL7||LJ
L7JLJL-JLJLJL--JLJ.L
";
        assert_eq!(solve(2, scattered).unwrap(), "8");
        assert_eq!(solve(2, tangled).unwrap(), "10");
    }

    #[test]
    fn squeezed_between_pipes() {
        let input = "\
..........
.S------7.
.|F----7|.
.||....||.
.||....||.
.|L-7F-J|.
.|..||..|.
.L--JL--J.
..........
";
        assert_eq!(solve(2, input).unwrap(), "4");
    }
}
