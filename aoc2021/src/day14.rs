use crate::error::malformed;
use crate::{PuzzleError, Result};
use itertools::{Itertools, MinMaxResult};
use rustc_hash::FxHashMap;
use tracing::debug;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut lines = input.trim().lines();
    let template = lines.next().unwrap_or_default().trim().as_bytes();
    let mut rules = FxHashMap::default();
    for line in lines.filter(|l| !l.trim().is_empty()) {
        match line.trim().as_bytes() {
            [a, b, b' ', b'-', b'>', b' ', c] => {rules.insert((*a, *b), *c);},
            _ => return Err(malformed(line, "expected AB -> C")),
        }
    }

    let mut pairs: FxHashMap<(u8, u8), u64> = FxHashMap::default();
    for (&a, &b) in template.iter().tuple_windows() {
        *pairs.entry((a, b)).or_default() += 1;
    }
    let mut elements: FxHashMap<u8, u64> = FxHashMap::default();
    for &e in template {
        *elements.entry(e).or_default() += 1;
    }

    let steps = if part == 1 {10} else {40};
    for _ in 0 .. steps {
        let mut next = FxHashMap::default();
        for (&(a, b), &n) in &pairs {
            match rules.get(&(a, b)) {
                Some(&c) => {
                    *next.entry((a, c)).or_default() += n;
                    *next.entry((c, b)).or_default() += n;
                    *elements.entry(c).or_default() += n;
                },
                None => *next.entry((a, b)).or_default() += n,
            }
        }
        pairs = next;
    }
    debug!("{} distinct pairs after {} steps", pairs.len(), steps);

    match elements.values().minmax() {
        MinMaxResult::NoElements => Err(PuzzleError::NoAnswer("empty template")),
        MinMaxResult::OneElement(_) => Ok("0".to_string()),
        MinMaxResult::MinMax(min, max) => Ok((max - min).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
NNCB

CH -> B
HH -> N
CB -> H
NH -> C
HB -> C
HC -> B
HN -> C
NN -> C
BH -> H
NC -> B
NB -> B
BN -> B
BB -> N
BC -> B
CC -> N
CN -> C
";

    #[test]
    fn ten_steps() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "1588");
    }

    #[test]
    fn forty_steps() {
        assert_eq!(solve(2, EXAMPLE).unwrap(), "2188189693529");
    }
}
