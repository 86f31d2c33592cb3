use anyhow::anyhow;
use aoc_runner::{AutoRegisterSolution, Part, SolveContext, SolveError, Solution};
use std::str::FromStr;

#[derive(AutoRegisterSolution)]
#[aoc(tags = ["dial"])]
pub struct Day01;

const DIAL_START: i64 = 50;
const DIAL_SIZE: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialCounts {
    /// Rotations that leave the dial on 0
    pub zero_counts: u64,
    /// Clicks that pass or land on 0
    pub pass_zero_counts: u64,
}

impl Solution for Day01 {
    fn day(&self) -> u8 {
        1
    }

    fn solve(&self, ctx: &SolveContext<'_>) -> Result<String, SolveError> {
        let rotations = ctx.load_lines_with(parse_rotation)?;
        let counts = count_zeros(&rotations);

        Ok(match ctx.part() {
            Part::First => counts.zero_counts,
            Part::Second => counts.pass_zero_counts,
        }
        .to_string())
    }
}

/// `L68` is -68, `R48` is 48
pub fn parse_rotation(line: &str) -> anyhow::Result<i32> {
    let line = line.trim();
    let negative = match line.as_bytes().first() {
        Some(b'L') => true,
        Some(b'R') => false,
        _ => return Err(anyhow!("first character need to be 'L' or 'R'")),
    };

    let val = <i32 as FromStr>::from_str(&line[1..])?;
    if val < 0 {
        Err(anyhow!("Rotate value must be non negative"))
    } else if negative {
        Ok(-val)
    } else {
        Ok(val)
    }
}

pub fn count_zeros(rotations: &[i32]) -> DialCounts {
    let (_, zero_counts, pass_zero_counts) = rotations.iter().fold(
        (DIAL_START, 0u64, 0u64),
        |(mut dial_value, mut zero_counts, mut pass_zero_counts), &rotate_val| {
            let old_dial_value = dial_value;
            dial_value += i64::from(rotate_val);
            if dial_value <= 0 && old_dial_value != 0 {
                pass_zero_counts += 1;
            }
            pass_zero_counts += (dial_value / DIAL_SIZE).unsigned_abs();
            dial_value = dial_value.rem_euclid(DIAL_SIZE);
            if dial_value == 0 {
                zero_counts += 1;
            }
            (dial_value, zero_counts, pass_zero_counts)
        },
    );

    DialCounts {
        zero_counts,
        pass_zero_counts,
    }
}
