use anyhow::{Context, anyhow};
use aoc_runner::{AutoRegisterSolution, Part, SolveContext, SolveError, Solution};
use itertools::Itertools;
use std::ops::RangeInclusive;

#[derive(AutoRegisterSolution)]
#[aoc(tags = ["ranges"])]
pub struct Day05;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    pub fresh: Vec<RangeInclusive<u64>>,
    pub ingredients: Vec<u64>,
}

impl Solution for Day05 {
    fn day(&self) -> u8 {
        5
    }

    fn solve(&self, ctx: &SolveContext<'_>) -> Result<String, SolveError> {
        let lines = ctx.load_lines_with(aoc_runner::convert::owned)?;
        let inventory =
            parse_inventory(&lines).map_err(|e| SolveError::InvalidInput(e.to_string()))?;

        let answer = match ctx.part() {
            Part::First => inventory
                .ingredients
                .iter()
                .filter(|id| inventory.fresh.iter().any(|range| range.contains(id)))
                .count() as u64,
            Part::Second => merge_ranges(inventory.fresh)
                .iter()
                .map(|range| range.end() - range.start() + 1)
                .sum(),
        };
        Ok(answer.to_string())
    }
}

/// Leading `a-b` lines are ranges; everything after is an ingredient id
pub fn parse_inventory(lines: &[String]) -> anyhow::Result<Inventory> {
    let split = lines
        .iter()
        .position(|line| !line.contains('-'))
        .unwrap_or(lines.len());
    let (range_lines, id_lines) = lines.split_at(split);

    let fresh = range_lines
        .iter()
        .map(|line| {
            let (start, end) = line
                .trim()
                .split_once('-')
                .ok_or_else(|| anyhow!("expected a range, got {line:?}"))?;
            let start: u64 = start
                .parse()
                .with_context(|| format!("bad range start in {line:?}"))?;
            let end: u64 = end
                .parse()
                .with_context(|| format!("bad range end in {line:?}"))?;
            Ok(start..=end)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let ingredients = id_lines
        .iter()
        .map(|line| {
            line.trim()
                .parse::<u64>()
                .with_context(|| format!("bad ingredient id {line:?}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(Inventory { fresh, ingredients })
}

/// Merge overlapping or touching ranges, sorted by start
pub fn merge_ranges(ranges: Vec<RangeInclusive<u64>>) -> Vec<RangeInclusive<u64>> {
    ranges
        .into_iter()
        .sorted_by_key(|range| *range.start())
        .fold(Vec::new(), |mut merged: Vec<RangeInclusive<u64>>, range| {
            match merged.last_mut() {
                Some(last) if *range.start() <= last.end().saturating_add(1) => {
                    if range.end() > last.end() {
                        *last = *last.start()..=*range.end();
                    }
                }
                _ => merged.push(range),
            }
            merged
        })
}
