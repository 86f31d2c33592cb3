use aoc_runner::{
    AutoRegisterSolution, InMemoryFileLoader, Part, RegistryBuilder, RunMode, SolutionOptions,
    SolveContext, SolveError, Solution, solve_timed,
};

#[derive(AutoRegisterSolution)]
#[aoc(tags = ["test", "sum"])]
struct SumSolution;

impl Solution for SumSolution {
    fn day(&self) -> u8 {
        41
    }

    fn solve(&self, ctx: &SolveContext<'_>) -> Result<String, SolveError> {
        let numbers = ctx.load_lines_with(str::parse::<i64>)?;
        let answer = match ctx.part() {
            Part::First => numbers.iter().sum::<i64>(),
            Part::Second => numbers.iter().product::<i64>(),
        };
        Ok(answer.to_string())
    }
}

// No #[aoc(...)] attribute at all
#[derive(AutoRegisterSolution)]
struct UntaggedSolution;

impl Solution for UntaggedSolution {
    fn day(&self) -> u8 {
        42
    }

    fn solve(&self, _ctx: &SolveContext<'_>) -> Result<String, SolveError> {
        Ok("untagged".to_string())
    }
}

#[test]
fn test_derived_solutions_auto_register() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins");
    let registry = registry.build();

    let sum = registry
        .get(41)
        .expect("SumSolution was not registered");
    assert_eq!(sum.tags, &["test", "sum"]);

    let untagged = registry
        .get(42)
        .expect("UntaggedSolution was not registered");
    assert!(untagged.tags.is_empty());
}

#[test]
fn test_tag_filter_selects_plugins() {
    let registry = RegistryBuilder::new()
        .register_solution_plugins(|plugin| plugin.tags.contains(&"sum"))
        .expect("Failed to register plugins")
        .build();

    assert_eq!(registry.days().collect::<Vec<_>>(), vec![41]);
}

#[test]
fn test_registered_solution_solves_both_parts() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    let entry = registry.get(41).unwrap();

    let loader = InMemoryFileLoader::new().with_shared_input(41, RunMode::Test, "2\n3\n4");
    let options = SolutionOptions::new(41, Part::First, RunMode::Test);

    let first = solve_timed(entry.solution, &loader, options).unwrap();
    assert_eq!(first.answer, "9");

    let second = solve_timed(entry.solution, &loader, options.with_part(Part::Second)).unwrap();
    assert_eq!(second.answer, "24");
}
