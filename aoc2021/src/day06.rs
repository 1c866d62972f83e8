use crate::error::malformed;
use crate::Result;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut school = [0u64; 9];
    for s in input.trim().split(',') {
        let timer: usize = s.trim().parse()?;
        *school.get_mut(timer).ok_or_else(|| malformed(s, "timer above 8"))? += 1;
    }

    let days = if part == 1 {80} else {256};
    for _ in 0 .. days {
        // timer-0 fish wrap to 8 as newborns, and their parents rejoin at 6
        school.rotate_left(1);
        school[6] += school[8];
    }
    Ok(school.iter().sum::<u64>().to_string())
}
