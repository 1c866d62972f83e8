use crate::error::malformed;
use crate::{PuzzleError, Result};
use regex::Regex;
use rustc_hash::FxHashSet;

enum Fold {
    X(u32),
    Y(u32),
}

/// Mirrors the dots beyond the fold line; `None` if one would land off the
/// paper.
fn fold(dots: &FxHashSet<(u32, u32)>, fold: &Fold) -> Option<FxHashSet<(u32, u32)>> {
    dots.iter().map(|&(x, y)| match *fold {
        Fold::X(at) if x > at => Some(((2 * at).checked_sub(x)?, y)),
        Fold::Y(at) if y > at => Some((x, (2 * at).checked_sub(y)?)),
        _ => Some((x, y)),
    }).collect()
}

fn render(dots: &FxHashSet<(u32, u32)>) -> String {
    let width = dots.iter().map(|d| d.0 + 1).max().unwrap_or(0);
    let height = dots.iter().map(|d| d.1 + 1).max().unwrap_or(0);
    (0 .. height).map(|y|
        (0 .. width).map(|x| if dots.contains(&(x, y)) {'#'} else {'.'}).collect::<String>()
    ).collect::<Vec<_>>().join("\n")
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let re = Regex::new(r"^fold along ([xy])=(\d+)$").unwrap();
    let (dots_str, folds_str) = input.trim().split_once("\n\n")
        .ok_or_else(|| malformed(input, "expected dots, a blank line, then folds"))?;

    let mut dots: FxHashSet<(u32, u32)> = FxHashSet::default();
    for line in dots_str.lines() {
        let (x, y) = line.trim().split_once(',').ok_or_else(|| malformed(line, "expected x,y"))?;
        dots.insert((x.parse()?, y.parse()?));
    }
    let mut folds = vec![];
    for line in folds_str.lines() {
        let caps = re.captures(line.trim()).ok_or_else(|| malformed(line, "expected fold along x=N or y=N"))?;
        let at: u32 = caps[2].parse()?;
        folds.push(if &caps[1] == "x" {Fold::X(at)} else {Fold::Y(at)});
    }

    let off_paper = PuzzleError::NoAnswer("a fold moves dots off the paper");
    if part == 1 {
        let first = folds.first().ok_or(PuzzleError::NoAnswer("no folds"))?;
        Ok(fold(&dots, first).ok_or(off_paper)?.len().to_string())
    } else {
        let dots = folds.iter().try_fold(dots, |dots, f| fold(&dots, f)).ok_or(off_paper)?;
        Ok(render(&dots))
    }
}
