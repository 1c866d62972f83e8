use crate::error::malformed;
use crate::{PuzzleError, Result};

enum Checked {
    Corrupted(u8),
    Incomplete(Vec<u8>),
}

fn closer(opener: u8) -> u8 {
    match opener {b'(' => b')', b'[' => b']', b'{' => b'}', _ => b'>'}
}

fn check(line: &str) -> Result<Checked> {
    let mut stack = vec![];
    for b in line.bytes() {
        match b {
            b'(' | b'[' | b'{' | b'<' => stack.push(closer(b)),
            b')' | b']' | b'}' | b'>' => if stack.pop() != Some(b) {return Ok(Checked::Corrupted(b))},
            _ => return Err(malformed(line, "unexpected character")),
        }
    }
    stack.reverse();
    Ok(Checked::Incomplete(stack))
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut syntax_score = 0u64;
    let mut completion_scores = vec![];
    for line in input.trim().lines() {
        match check(line.trim())? {
            Checked::Corrupted(b) => syntax_score += match b {
                b')' => 3, b']' => 57, b'}' => 1197, _ => 25137
            },
            Checked::Incomplete(completion) if !completion.is_empty() => {
                completion_scores.push(completion.iter().fold(0u64, |a, &b| 5 * a + match b {
                    b')' => 1, b']' => 2, b'}' => 3, _ => 4
                }));
            },
            Checked::Incomplete(_) => (),
        }
    }

    if part == 1 {
        Ok(syntax_score.to_string())
    } else if completion_scores.is_empty() {
        Err(PuzzleError::NoAnswer("no incomplete lines"))
    } else {
        completion_scores.sort_unstable();
        Ok(completion_scores[completion_scores.len() / 2].to_string())
    }
}
