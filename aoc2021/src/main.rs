use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "aoc2021", about = "Advent of Code 2021 solutions")]
struct Args {
    /// Day to run; every day with an input file when omitted
    day: Option<usize>,

    /// Part to run; both when omitted
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,

    /// Read `day{DAY}test{N}.in` instead of `day{DAY}.in`
    #[arg(short, long)]
    test: Option<u32>,

    /// Input file, bypassing the naming convention
    #[arg(short, long, requires = "day")]
    input: Option<PathBuf>,

    #[arg(long, env = "AOC_INPUT_DIR", default_value = ".")]
    input_dir: PathBuf,

    /// Fail unless the answer equals this
    #[arg(long, requires = "part")]
    expect: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "aoc2021=debug" } else { "aoc2021=info" })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn input_path(args: &Args, day: usize) -> PathBuf {
    match (&args.input, args.test) {
        (Some(path), _) => path.clone(),
        (None, Some(test)) => args.input_dir.join(format!("day{}test{}.in", day, test)),
        (None, None) => args.input_dir.join(format!("day{}.in", day)),
    }
}

fn format_answer(labelled: bool, day: usize, part: u8, answer: &str) -> String {
    if labelled {
        format!("day {} part {}: {}", day, part, answer)
    } else {
        answer.to_string()
    }
}

fn check_expected(day: usize, part: u8, answer: &str, expected: Option<&str>) -> anyhow::Result<()> {
    match expected {
        Some(expected) if answer != expected => {
            bail!("day {} part {}: got {}, expected {}", day, part, answer, expected)
        },
        _ => Ok(()),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let days = match args.day {
        Some(day) => vec![day],
        None => (1 ..= aoc2021::DAYS.len()).collect(),
    };
    let parts = match args.part {
        Some(part) => vec![part],
        None => vec![1, 2],
    };
    let labelled = days.len() * parts.len() > 1;

    let mut total = Duration::ZERO;
    for day in days {
        let fname = input_path(&args, day);
        if args.day.is_none() && !fname.exists() {
            warn!("skipping day {}: {} not found", day, fname.display());
            continue;
        }
        let input = std::fs::read_to_string(&fname)
            .with_context(|| format!("cannot read {}", fname.display()))?;

        for &part in &parts {
            let time = Instant::now();
            let answer = aoc2021::solve(day, part, &input)
                .with_context(|| format!("day {} part {}", day, part))?;
            let elapsed = time.elapsed();
            total += elapsed;
            info!("day {} part {}: {} seconds elapsed", day, part, elapsed.as_secs_f32());

            println!("{}", format_answer(labelled, day, part, &answer));
            check_expected(day, part, &answer, args.expect.as_deref())?;
        }
    }
    info!("{} seconds elapsed in total", total.as_secs_f32());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("aoc2021").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn input_file_names() {
        assert_eq!(input_path(&args(&["--input-dir", "inp"]), 6), PathBuf::from("inp/day6.in"));
        assert_eq!(input_path(&args(&["4", "--input-dir", "inp", "-t", "2"]), 4), PathBuf::from("inp/day4test2.in"));
        assert_eq!(input_path(&args(&["4", "-i", "mine.txt", "-t", "2"]), 4), PathBuf::from("mine.txt"));
    }

    #[test]
    fn answers_are_labelled_only_when_several() {
        assert_eq!(format_answer(false, 1, 2, "5"), "5");
        assert_eq!(format_answer(true, 1, 2, "5"), "day 1 part 2: 5");
    }

    #[test]
    fn expected_answer_mismatch() {
        assert!(check_expected(1, 2, "5", None).is_ok());
        assert!(check_expected(1, 2, "5", Some("5")).is_ok());
        let err = check_expected(1, 2, "5", Some("6")).unwrap_err();
        assert_eq!(err.to_string(), "day 1 part 2: got 5, expected 6");
    }

    #[test]
    fn part_out_of_range() {
        assert!(Args::try_parse_from(["aoc2021", "1", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc2021", "--expect", "5"]).is_err());
    }
}
