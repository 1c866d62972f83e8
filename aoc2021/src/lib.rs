//! Advent of Code 2021, days 1 through 14.

mod error;

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;
pub mod day10;
pub mod day11;
pub mod day12;
pub mod day13;
pub mod day14;

pub use error::{PuzzleError, Result};

pub type Solver = fn(u8, &str) -> Result<String>;

pub const DAYS: [Solver; 14] = [
    day01::solve, day02::solve, day03::solve, day04::solve, day05::solve,
    day06::solve, day07::solve, day08::solve, day09::solve, day10::solve,
    day11::solve, day12::solve, day13::solve, day14::solve,
];

pub fn solve(day: usize, part: u8, input: &str) -> Result<String> {
    let solver = day.checked_sub(1)
        .and_then(|ix| DAYS.get(ix))
        .ok_or(PuzzleError::UnknownDay(day))?;
    if part != 1 && part != 2 {
        return Err(PuzzleError::UnknownPart(part));
    }
    solver(part, input)
}
