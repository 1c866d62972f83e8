use crate::error::malformed;
use crate::Result;
use regex::Regex;

#[derive(Default)]
struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let game_re = Regex::new(r"^Game (\d+): (.*)$").unwrap();
    let mut sum = 0;
    for line in input.trim().lines() {
        let caps = game_re.captures(line.trim()).ok_or_else(|| malformed(line, "expected Game N: draws"))?;
        let id: u32 = caps[1].parse()?;

        let mut most = Cubes::default();
        for amount_and_color in caps[2].split([';', ',']) {
            let (amount, color) = amount_and_color.trim().split_once(' ')
                .ok_or_else(|| malformed(line, "expected an amount and a color"))?;
            let amount: u32 = amount.parse()?;
            let max = match color {
                "red" => &mut most.red,
                "green" => &mut most.green,
                "blue" => &mut most.blue,
                _ => return Err(malformed(line, "unknown color")),
            };
            *max = amount.max(*max);
        }

        if part == 1 {
            if most.red <= 12 && most.green <= 13 && most.blue <= 14 {sum += id};
        } else {
            sum += most.red * most.green * most.blue;
        }
    }
    Ok(sum.to_string())
}
