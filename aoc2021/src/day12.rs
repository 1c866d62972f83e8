use crate::error::malformed;
use crate::Result;
use rustc_hash::FxHashMap;

fn is_small(cave: &str) -> bool {cave.bytes().all(|b| b.is_ascii_lowercase())}

fn count_paths<'a>(
    graph: &FxHashMap<&'a str, Vec<&'a str>>,
    path: &mut Vec<&'a str>,
    revisit_left: bool,
) -> usize {
    let here = path[path.len() - 1];
    if here == "end" {return 1};
    let mut paths = 0;
    for &next in graph.get(here).into_iter().flatten() {
        if next == "start" {continue};
        let revisit = is_small(next) && path.contains(&next);
        if revisit && !revisit_left {continue};
        path.push(next);
        paths += count_paths(graph, path, revisit_left && !revisit);
        path.pop();
    }
    paths
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut graph: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    for line in input.trim().lines() {
        let (a, b) = line.trim().split_once('-').ok_or_else(|| malformed(line, "expected cave-cave"))?;
        graph.entry(a).or_default().push(b);
        graph.entry(b).or_default().push(a);
    }
    Ok(count_paths(&graph, &mut vec!["start"], part == 2).to_string())
}
