use crate::error::malformed;
use crate::{PuzzleError, Result};
use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::debug;

fn gcd(a: u64, b: u64) -> u64 {if b == 0 {a} else {gcd(b, a % b)}}
fn lcm(a: u64, b: u64) -> u64 {a / gcd(a, b) * b}

struct Network<'a> {
    turns: &'a [u8],
    nodes: FxHashMap<&'a str, (&'a str, &'a str)>,
}

impl<'a> Network<'a> {
    fn parse(input: &'a str) -> Result<Network<'a>> {
        let re = Regex::new(r"^(\w+) = \((\w+), (\w+)\)$").unwrap();
        let mut lines = input.trim().lines();
        let turns = lines.next().unwrap_or_default().trim().as_bytes();
        if turns.is_empty() || turns.iter().any(|&t| t != b'L' && t != b'R') {
            return Err(malformed(input, "first line must be L/R instructions"));
        }
        let mut nodes = FxHashMap::default();
        for line in lines.map(str::trim).filter(|l| !l.is_empty()) {
            let caps = re.captures(line).ok_or_else(|| malformed(line, "expected NODE = (LEFT, RIGHT)"))?;
            let (_, [node, left, right]) = caps.extract();
            nodes.insert(node, (left, right));
        }
        Ok(Network {turns, nodes})
    }

    /// Steps from `start` until `is_end` holds.
    fn walk(&self, start: &str, is_end: impl Fn(&str) -> bool) -> Result<u64> {
        let limit = self.turns.len() * (self.nodes.len() + 1);
        let mut here = start;
        for (steps, &turn) in self.turns.iter().cycle().enumerate().take(limit) {
            if is_end(here) {return Ok(steps as u64)};
            let &(left, right) = self.nodes.get(here)
                .ok_or_else(|| malformed(here, "node is not in the network"))?;
            here = if turn == b'L' {left} else {right};
        }
        Err(PuzzleError::NoAnswer("walk never reaches an end node"))
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let network = Network::parse(input)?;
    if part == 1 {
        return Ok(network.walk("AAA", |n| n == "ZZZ")?.to_string());
    }

    // every ghost's path loops back with the same period as its first arrival
    let mut period = 1;
    for &start in network.nodes.keys().filter(|n| n.ends_with('A')) {
        let steps = network.walk(start, |n| n.ends_with('Z'))?;
        debug!("{} reaches an end after {} steps", start, steps);
        period = lcm(period, steps);
    }
    Ok(period.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_route() {
        let input = "\
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
";
        assert_eq!(solve(1, input).unwrap(), "2");
    }

    #[test]
    fn repeated_instructions() {
        let input = "\
LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)
";
        assert_eq!(solve(1, input).unwrap(), "6");
    }

    #[test]
    fn ghost_paths() {
        let input = "\
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";
        assert_eq!(solve(2, input).unwrap(), "6");
    }

    #[test]
    fn dead_end_loop() {
        let input = "L\n\nAAA = (BBB, BBB)\nBBB = (AAA, AAA)\nZZZ = (ZZZ, ZZZ)\n";
        assert!(matches!(solve(1, input), Err(PuzzleError::NoAnswer(_))));
    }
}
