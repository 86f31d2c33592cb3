//! Console helpers for eyeballing intermediate values while solving

use std::fmt::Display;

const EMPTY: &str = "Empty";

fn join<I>(values: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut values = values.into_iter().peekable();
    if values.peek().is_none() {
        return EMPTY.to_string();
    }

    let mut out = String::new();
    for (i, value) in values.enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&value.to_string());
    }
    out
}

/// Values joined with `", "`, or `Empty`
pub fn format_values<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    join(values, ", ")
}

/// Values one per line, or `Empty`
pub fn format_lines<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    join(values, "\n")
}

/// Each row as `a, b, c`, one row per line, or `Empty`
pub fn format_nested<I, R>(rows: I) -> String
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: Display,
{
    format_lines(rows.into_iter().map(format_values))
}

pub fn write_values<I>(values: I)
where
    I: IntoIterator,
    I::Item: Display,
{
    println!("{}", format_values(values));
}

pub fn write_lines<I>(values: I)
where
    I: IntoIterator,
    I::Item: Display,
{
    println!("{}", format_lines(values));
}

pub fn write_nested<I, R>(rows: I)
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: Display,
{
    println!("{}", format_nested(rows));
}
