//! Tests for the input loaders.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::error::GridError;
use crate::point::Point;

fn write_input(root: &Path, day: u8, part: Part, mode: RunMode, content: &str) {
    let path = root.join(relative_data_path(day, part, mode));
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn memory(content: &str) -> InMemoryFileLoader {
    InMemoryFileLoader::new().with_input(7, Part::First, RunMode::Test, content)
}

#[test]
fn test_data_file_names() {
    assert_eq!(data_file_name(Part::First, RunMode::Test), "Test1.txt");
    assert_eq!(data_file_name(Part::Second, RunMode::Full), "Full2.txt");
    assert_eq!(
        relative_data_path(3, Part::Second, RunMode::Test),
        Path::new("Day03").join("Data").join("Test2.txt")
    );
    assert_eq!(
        relative_data_path(100, Part::First, RunMode::Full),
        Path::new("Day100").join("Data").join("Full1.txt")
    );
}

#[test]
fn test_fs_loader_reads_resolved_path() {
    let temp = TempDir::new().unwrap();
    write_input(temp.path(), 4, Part::Second, RunMode::Full, "hello\n");

    let loader = FsFileLoader::new(temp.path());
    assert_eq!(
        loader.load_raw(4, Part::Second, RunMode::Full).unwrap(),
        "hello\n"
    );
}

#[test]
fn test_fs_loader_missing_file() {
    let temp = TempDir::new().unwrap();
    let loader = FsFileLoader::new(temp.path());

    match loader.load_raw(1, Part::First, RunMode::Test) {
        Err(LoadError::Io { path, source }) => {
            assert_eq!(path, temp.path().join("Day01/Data/Test1.txt"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_discover_prefers_earlier_candidates() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("solutions")).unwrap();
    fs::create_dir_all(temp.path().join("Solutions")).unwrap();

    let loader = FsFileLoader::discover(temp.path());
    assert_eq!(loader.root(), temp.path().join("Solutions"));

    fs::create_dir_all(temp.path().join("data")).unwrap();
    let loader = FsFileLoader::discover(temp.path());
    assert_eq!(loader.root(), temp.path().join("data"));
}

#[test]
fn test_discover_falls_back_to_first_candidate() {
    let temp = TempDir::new().unwrap();
    let loader = FsFileLoader::discover(temp.path());
    assert_eq!(loader.root(), temp.path().join("data"));
    assert!(matches!(
        loader.load_raw(1, Part::First, RunMode::Test),
        Err(LoadError::Io { .. })
    ));
}

#[test]
fn test_memory_loader_missing_entry() {
    let loader = InMemoryFileLoader::new();
    match loader.load_raw(9, Part::First, RunMode::Full) {
        Err(LoadError::Io { path, source }) => {
            assert_eq!(path, Path::new("Day09/Data/Full1.txt"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_load_lines_drops_blank_lines_in_order() {
    let loader = memory("first\n\n   \nsecond\r\nthird\n\n");
    let lines = loader
        .load_lines_with(7, Part::First, RunMode::Test, convert::owned)
        .unwrap();
    assert_eq!(lines, vec!["first", "second", "third"]);
}

#[test]
fn test_load_lines_default_converter() {
    let loader = memory("42\n3.5\ntrue\nabc\n");
    let values = loader.load_lines(7, Part::First, RunMode::Test).unwrap();
    assert_eq!(
        values,
        vec![
            Value::Int(42),
            Value::Float(3.5),
            Value::Bool(true),
            Value::Text("abc".into())
        ]
    );
}

#[test]
fn test_load_items_splits_on_whitespace_runs() {
    let loader = memory("3   4\n\n4\t3\n 10 -2 7 \n");
    let rows = loader
        .load_items_with(7, Part::First, RunMode::Test, str::parse::<i64>)
        .unwrap();
    assert_eq!(rows, vec![vec![3, 4], vec![4, 3], vec![10, -2, 7]]);
}

#[test]
fn test_load_items_reports_bad_token_with_line() {
    let loader = memory("1 2\n\n3 x\n");
    let err = loader
        .load_items_with(7, Part::First, RunMode::Test, str::parse::<i64>)
        .unwrap_err();
    match err {
        LoadError::Convert { line, input, .. } => {
            assert_eq!(line, 3);
            assert_eq!(input, "x");
        }
        other => panic!("Expected Convert error, got {:?}", other),
    }
}

#[test]
fn test_load_grid_skips_inner_whitespace() {
    let loader = memory("a b c\n\nde\n");
    let grid = loader
        .load_grid_with(7, Part::First, RunMode::Test, convert::char)
        .unwrap();
    assert_eq!(grid.to_strings(), vec!["abc", "de"]);
    assert_eq!(grid.get(Point::new(1, 1)), Some(&'e'));
    assert!(grid.out_of_bounds(Point::new(1, 2)));
}

#[test]
fn test_load_grid_default_converter_digits() {
    let loader = memory("12\n3x\n");
    let grid = loader.load_grid(7, Part::First, RunMode::Test).unwrap();
    assert_eq!(grid.get(Point::new(0, 1)), Some(&Value::Int(2)));
    assert_eq!(grid.get(Point::new(1, 1)), Some(&Value::Text("x".into())));
}

#[test]
fn test_load_grid_from_blank_input_is_empty_error() {
    let loader = memory("\n  \n");
    let err = loader
        .load_grid_with(7, Part::First, RunMode::Test, convert::char)
        .unwrap_err();
    assert!(matches!(err, LoadError::Grid(GridError::Empty)));
}

#[test]
fn test_loader_works_through_trait_object() {
    let loader: Box<dyn FileLoader> = Box::new(memory("1\n2\n"));
    let numbers = loader
        .load_lines_with(7, Part::First, RunMode::Test, str::parse::<u32>)
        .unwrap();
    assert_eq!(numbers, vec![1, 2]);
}

#[test]
fn test_char_converter_rejects_multiple_chars() {
    assert_eq!(convert::char("a"), Ok('a'));
    assert_eq!(convert::char("ab"), Err(convert::NotAChar));
    assert_eq!(convert::char(""), Err(convert::NotAChar));
}
