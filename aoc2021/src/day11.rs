use crate::error::malformed;
use crate::Result;

struct Cavern {
    cols: usize,
    energy: Vec<u8>,
}

impl Cavern {
    fn parse(input: &str) -> Result<Cavern> {
        let mut energy = vec![];
        let mut cols = 0;
        for line in input.trim().lines().map(str::trim) {
            if cols != 0 && line.len() != cols {
                return Err(malformed(line, "rows differ in length"));
            }
            cols = line.len();
            for b in line.bytes() {
                if !b.is_ascii_digit() {return Err(malformed(line, "energy levels are single digits"))};
                energy.push(b - b'0');
            }
        }
        Ok(Cavern {cols, energy})
    }

    /// Advances one step and returns how many octopuses flashed.
    fn step(&mut self) -> usize {
        let rows = self.energy.len() / self.cols;
        let mut flashing = vec![];
        for (ix, e) in self.energy.iter_mut().enumerate() {
            *e += 1;
            if *e == 10 {flashing.push(ix)};
        }
        let mut flashes = 0;
        while let Some(ix) = flashing.pop() {
            flashes += 1;
            let (r, c) = (ix / self.cols, ix % self.cols);
            for nr in r.saturating_sub(1) ..= (r + 1).min(rows - 1) {
                for nc in c.saturating_sub(1) ..= (c + 1).min(self.cols - 1) {
                    let n = nr * self.cols + nc;
                    if n == ix {continue};
                    self.energy[n] += 1;
                    if self.energy[n] == 10 {flashing.push(n)};
                }
            }
        }
        for e in &mut self.energy {
            if *e > 9 {*e = 0};
        }
        flashes
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut cavern = Cavern::parse(input)?;
    if cavern.energy.is_empty() {
        return Ok("0".to_string());
    }
    if part == 1 {
        Ok((0 .. 100).map(|_| cavern.step()).sum::<usize>().to_string())
    } else {
        let everyone = cavern.energy.len();
        let mut n_step = 1;
        while cavern.step() != everyone {n_step += 1};
        Ok(n_step.to_string())
    }
}
