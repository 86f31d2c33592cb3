//! Configuration resolution from the settings file and CLI args

use crate::cli::Args;
use crate::error::CliError;
use aoc_runner::{Part, RunMode, SolutionOptions};
use log::{LevelFilter, debug, warn};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Settings file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "appsettings.json";

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Day, part and mode for a single run
    pub options: SolutionOptions,
    /// Run every registered day for both parts
    pub run_all: bool,
    /// Explicit data root (None = discover)
    pub data_dir: Option<PathBuf>,
    /// Tags to filter solutions
    pub tags: Vec<String>,
}

impl Config {
    /// Build config from CLI args, layering them over the settings file
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let settings = match &args.config {
            Some(path) => Some(read_settings(path)?),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Some(read_settings(path)?)
                } else {
                    None
                }
            }
        };

        let file_options = match settings {
            Some(text) => parse_settings(&text)?,
            None => SolutionOptions::default(),
        };
        let options = apply_overrides(file_options, &args)?;

        Ok(Config {
            options,
            run_all: args.all,
            data_dir: args.data_dir,
            tags: args.tags,
        })
    }
}

fn read_settings(path: &Path) -> Result<String, CliError> {
    debug!("Reading settings from {}", path.display());
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Map the `-v` count onto a log level
pub fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn apply_overrides(
    mut options: SolutionOptions,
    args: &Args,
) -> Result<SolutionOptions, CliError> {
    if let Some(day) = args.day {
        options = options.with_day(day);
    }
    if let Some(part) = args.part {
        let part = Part::from_number(part)
            .ok_or_else(|| CliError::Config(format!("Invalid part {}: must be 1 or 2", part)))?;
        options = options.with_part(part);
    }
    if let Some(mode) = args.mode {
        options = options.with_mode(mode.into());
    }
    Ok(options)
}

/// Read solution options from the "Solution" section of a settings file.
///
/// Comments are allowed. Missing, unknown or malformed fields keep their
/// defaults. Invalid JSON and a well-formed day outside `1..=255` are errors.
pub fn parse_settings(text: &str) -> Result<SolutionOptions, CliError> {
    let root: Value = serde_json::from_str(&strip_json_comments(text))?;
    let mut options = SolutionOptions::default();

    let Some(section) = root.get("Solution").and_then(Value::as_object) else {
        debug!("No \"Solution\" section in settings, using defaults");
        return Ok(options);
    };

    if let Some(value) = field(section, &["Day", "day"]) {
        match parse_day(value)? {
            Some(day) => options.day = day,
            None => warn!("Ignoring Solution.Day value {}", value),
        }
    }
    if let Some(value) = field(section, &["SolutionType", "solutionType"]) {
        match value.as_str().and_then(|s| s.trim().parse::<Part>().ok()) {
            Some(part) => options.part = part,
            None => warn!("Ignoring Solution.SolutionType value {}", value),
        }
    }
    if let Some(value) = field(section, &["RunType", "runType"]) {
        match value.as_str().and_then(|s| s.trim().parse::<RunMode>().ok()) {
            Some(mode) => options.mode = mode,
            None => warn!("Ignoring Solution.RunType value {}", value),
        }
    }

    Ok(options)
}

fn field<'a>(section: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| section.get(*name))
}

/// Integers, digit strings, and floats (truncated). `None` for anything else.
fn parse_day(value: &Value) -> Result<Option<u8>, CliError> {
    let day = match value {
        Value::Number(n) => match n.as_i64() {
            Some(day) => day,
            None => match n.as_f64() {
                Some(day) if day.is_finite() => day.trunc() as i64,
                _ => return Ok(None),
            },
        },
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(day) => day,
            Err(_) => return Ok(None),
        },
        _ => return Ok(None),
    };

    u8::try_from(day)
        .ok()
        .filter(|day| *day > 0)
        .map(Some)
        .ok_or_else(|| CliError::Config(format!("Solution.Day {} is not a valid day", day)))
}

/// Remove `//` and `/* */` comments outside `"` or `'` quoted strings.
///
/// Newlines inside comments are kept so parse errors report the right line.
pub fn strip_json_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }

        let next = chars.peek().copied();
        match (c, next) {
            ('"' | '\'', _) => {
                quote = Some(c);
                out.push(c);
            }
            ('/', Some('/')) => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    if c == '\n' {
                        out.push('\n');
                    }
                    prev = c;
                }
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ModeArg;
    use log::{Level, Log, Metadata, Record};
    use std::fs;
    use std::sync::{Mutex, Once};
    use tempfile::TempDir;

    /// Records every warning logged by any test in this binary
    struct WarningLog;

    static WARNINGS: Mutex<Vec<String>> = Mutex::new(Vec::new());
    static INIT_LOGGER: Once = Once::new();

    impl Log for WarningLog {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Warn
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                WARNINGS.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    fn capture_warnings() {
        INIT_LOGGER.call_once(|| {
            log::set_logger(&WarningLog).unwrap();
            log::set_max_level(LevelFilter::Warn);
        });
    }

    fn warned(needle: &str) -> bool {
        WARNINGS.lock().unwrap().iter().any(|w| w.contains(needle))
    }

    const SETTINGS: &str = r#"{
  // which puzzle to run
  "Solution": {
    "Day": 11, /* inline */
    "SolutionType": "second",
    "RunType": "Full"
  },
  "Url": "https://example.com/a//b"
}"#;

    #[test]
    fn test_strip_comments_keeps_strings() {
        let stripped = strip_json_comments(SETTINGS);
        assert!(!stripped.contains("which puzzle"));
        assert!(!stripped.contains("inline"));
        assert!(stripped.contains("https://example.com/a//b"));
        assert_eq!(stripped.lines().count(), SETTINGS.lines().count());
    }

    #[test]
    fn test_strip_comments_escaped_quote() {
        let text = r#"{"a": "say \"hi\" // not a comment"} // comment"#;
        assert_eq!(
            strip_json_comments(text),
            r#"{"a": "say \"hi\" // not a comment"} "#
        );
    }

    #[test]
    fn test_parse_settings() {
        let options = parse_settings(SETTINGS).unwrap();
        assert_eq!(options, SolutionOptions::new(11, Part::Second, RunMode::Full));
    }

    #[test]
    fn test_camel_case_and_lenient_values() {
        let options =
            parse_settings(r#"{"Solution": {"day": "5", "solutionType": "bogus", "runType": 3}}"#)
                .unwrap();
        assert_eq!(options, SolutionOptions::new(5, Part::First, RunMode::Test));

        let options = parse_settings(r#"{"Solution": {"Day": 7.9}}"#).unwrap();
        assert_eq!(options.day, 7);

        let options = parse_settings(r#"{"Solution": {"Day": "soon"}}"#).unwrap();
        assert_eq!(options.day, 1);
    }

    #[test]
    fn test_out_of_range_day_is_error() {
        for text in [
            r#"{"Solution": {"Day": 0}}"#,
            r#"{"Solution": {"Day": 300}}"#,
            r#"{"Solution": {"Day": -2}}"#,
            r#"{"Solution": {"Day": "0"}}"#,
        ] {
            assert!(
                matches!(parse_settings(text), Err(CliError::Config(_))),
                "{text} should be rejected"
            );
        }
        assert_eq!(
            parse_settings(r#"{"Solution": {"Day": "100"}}"#).unwrap().day,
            100
        );
    }

    #[test]
    fn test_ignored_values_are_warned() {
        capture_warnings();
        let options =
            parse_settings(r#"{"Solution": {"Day": 100, "SolutionType": "bogus", "RunType": []}}"#)
                .unwrap();

        assert_eq!(options, SolutionOptions::new(100, Part::First, RunMode::Test));
        assert!(warned("Ignoring Solution.SolutionType value \"bogus\""));
        assert!(warned("Ignoring Solution.RunType value []"));
    }

    #[test]
    fn test_log_level_from_verbosity() {
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(1), LevelFilter::Info);
        assert_eq!(log_level(2), LevelFilter::Debug);
        assert_eq!(log_level(5), LevelFilter::Trace);
    }

    #[test]
    fn test_missing_section_uses_defaults() {
        assert_eq!(parse_settings("{}").unwrap(), SolutionOptions::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(
            parse_settings("{ \"Solution\": "),
            Err(CliError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_cli_overrides_settings_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, SETTINGS).unwrap();

        let args = Args {
            config: Some(path),
            part: Some(1),
            mode: Some(ModeArg::Test),
            ..Args::default()
        };
        let config = Config::from_args(args).unwrap();

        assert_eq!(config.options, SolutionOptions::new(11, Part::First, RunMode::Test));
        assert!(!config.run_all);
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = TempDir::new().unwrap();
        let args = Args {
            config: Some(dir.path().join("absent.json")),
            ..Args::default()
        };
        assert!(matches!(Config::from_args(args), Err(CliError::Io { .. })));
    }
}
