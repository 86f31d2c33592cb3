use aoc_runner::{AutoRegisterSolution, Part, SolveContext, SolveError, Solution};
use itertools::Itertools;

/// Warm-up puzzle comparing two columns of location ids
#[derive(AutoRegisterSolution)]
#[aoc(tags = ["example"])]
pub struct Day100;

impl Solution for Day100 {
    fn day(&self) -> u8 {
        100
    }

    fn solve(&self, ctx: &SolveContext<'_>) -> Result<String, SolveError> {
        let rows = ctx.load_items_with(str::parse::<i64>)?;
        let (list_one, list_two) = split_columns(&rows)?;

        let answer = match ctx.part() {
            Part::First => total_distance(&list_one, &list_two),
            Part::Second => similarity(&list_one, &list_two),
        };
        Ok(answer.to_string())
    }
}

/// Columns 0 and 1 of every row; extra tokens are ignored
fn split_columns(rows: &[Vec<i64>]) -> Result<(Vec<i64>, Vec<i64>), SolveError> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| match row.as_slice() {
            [a, b, ..] => Ok((*a, *b)),
            _ => Err(SolveError::InvalidInput(format!(
                "row {} has {} values, expected at least 2",
                i + 1,
                row.len()
            ))),
        })
        .process_results(|pairs| pairs.unzip())
}

/// Sum of pairwise gaps after sorting both lists
pub fn total_distance(list_one: &[i64], list_two: &[i64]) -> i64 {
    list_one
        .iter()
        .sorted()
        .zip(list_two.iter().sorted())
        .map(|(a, b)| (a - b).abs())
        .sum()
}

pub fn similarity(list_one: &[i64], list_two: &[i64]) -> i64 {
    let counts = list_two.iter().counts();
    list_one
        .iter()
        .map(|value| value * counts.get(value).copied().unwrap_or(0) as i64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_runner::{InMemoryFileLoader, RunMode, SolutionOptions};
    use proptest::prelude::*;

    const SAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    fn solve(input: &str, part: Part) -> Result<String, SolveError> {
        let loader = InMemoryFileLoader::new().with_shared_input(100, RunMode::Test, input);
        let ctx = SolveContext::new(&loader, SolutionOptions::new(100, part, RunMode::Test));
        Day100.solve(&ctx)
    }

    #[test]
    fn test_sample() {
        assert_eq!(solve(SAMPLE, Part::First).unwrap(), "11");
        assert_eq!(solve(SAMPLE, Part::Second).unwrap(), "31");
    }

    #[test]
    fn test_two_rows() {
        // both columns sort to [3, 4]
        assert_eq!(solve("3 4\n4 3", Part::First).unwrap(), "0");
        assert_eq!(solve("3 4\n4 3", Part::Second).unwrap(), "7");
        assert_eq!(solve("1 4\n2 3", Part::First).unwrap(), "4");
    }

    #[test]
    fn test_extra_columns_ignored() {
        assert_eq!(solve("3 4 9\n4 3", Part::First).unwrap(), "0");
        assert_eq!(solve("3 4 9\n4 3", Part::Second).unwrap(), "7");
    }

    #[test]
    fn test_short_row_is_invalid_input() {
        assert!(matches!(
            solve("1 2\n3\n", Part::First),
            Err(SolveError::InvalidInput(_))
        ));
    }

    proptest! {
        /// Distance ignores the order of either list
        #[test]
        fn prop_distance_is_order_independent(
            pairs in prop::collection::vec((-1000i64..1000, -1000i64..1000), 0..20)
        ) {
            let (one, two): (Vec<i64>, Vec<i64>) = pairs.into_iter().unzip();
            let mut reversed = two.clone();
            reversed.reverse();
            prop_assert_eq!(total_distance(&one, &two), total_distance(&one, &reversed));
        }

        /// Comparing a list with itself has zero distance
        #[test]
        fn prop_self_distance_is_zero(list in prop::collection::vec(-1000i64..1000, 0..20)) {
            prop_assert_eq!(total_distance(&list, &list), 0);
        }
    }
}
