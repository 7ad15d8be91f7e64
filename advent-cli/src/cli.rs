//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

/// Daily puzzle solver runner
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Run the daily puzzle solvers", version)]
pub struct Args {
    /// Run against the embedded samples and log at debug level
    #[arg(long)]
    pub debug: bool,

    /// Comma-separated years to run (all years if omitted)
    #[arg(long, value_name = "LIST")]
    pub years: Option<String>,

    /// Comma-separated days to run (all days if omitted)
    #[arg(long, value_name = "LIST")]
    pub days: Option<String>,

    /// Settings file with `SessionCookie` and `InputCacheFolder`
    #[arg(long, default_value = "settings.local.json")]
    pub config: PathBuf,

    /// Cache directory for puzzle inputs, overrides the settings file
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Number of threads for the parallel searches inside solvers
    #[arg(long)]
    pub threads: Option<usize>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Selected years; empty means all
    pub fn year_list(&self) -> Vec<u16> {
        self.years.as_deref().map(parse_list).unwrap_or_default()
    }

    /// Selected days; empty means all
    pub fn day_list(&self) -> Vec<u8> {
        self.days.as_deref().map(parse_list).unwrap_or_default()
    }
}

/// Parse a comma-separated list, silently dropping tokens that do not parse
///
/// Zero is no valid year or day and is dropped as well, so `days=0` leaves
/// the filter open.
pub fn parse_list<T: FromStr + PartialEq + From<u8>>(raw: &str) -> Vec<T> {
    raw.split(',')
        .filter_map(|token| token.trim().parse().ok())
        .filter(|value: &T| *value != T::from(0))
        .collect()
}

/// Rewrite the bare `debug`, `days=..` and `years=..` forms into clap flags
///
/// Each may carry a `-`, `--` or `/` prefix. The program name and anything
/// else pass through untouched.
pub fn normalize_args(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut args = args.into_iter();
    args.next()
        .into_iter()
        .chain(args.map(|arg| normalize_arg(&arg).unwrap_or(arg)))
        .collect()
}

fn normalize_arg(arg: &str) -> Option<String> {
    let bare = arg
        .strip_prefix("--")
        .or_else(|| arg.strip_prefix('-'))
        .or_else(|| arg.strip_prefix('/'))
        .unwrap_or(arg);

    if bare.eq_ignore_ascii_case("debug") {
        return Some("--debug".to_string());
    }
    let (key, value) = bare.split_once('=')?;
    match key.to_ascii_lowercase().as_str() {
        "days" => Some(format!("--days={}", value)),
        "years" => Some(format!("--years={}", value)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parse(args: &[&str]) -> Args {
        let args = normalize_args(args.iter().map(|s| s.to_string()));
        Args::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_bare_forms() {
        let args = parse(&["advent", "debug", "days=1,2", "/years=2023"]);
        assert!(args.debug);
        assert_eq!(args.day_list(), vec![1, 2]);
        assert_eq!(args.year_list(), vec![2023]);
    }

    #[test]
    fn test_flag_forms() {
        let args = parse(&["advent", "--days", "5", "-q", "--cache-dir", "/tmp/inputs"]);
        assert!(!args.debug);
        assert!(args.quiet);
        assert_eq!(args.day_list(), vec![5]);
        assert_eq!(args.cache_dir, Some(PathBuf::from("/tmp/inputs")));
        assert_eq!(args.config, PathBuf::from("settings.local.json"));
    }

    #[test]
    fn test_unparsable_tokens_are_dropped() {
        let args = parse(&["advent", "-days=1,x,,25", "years=twenty"]);
        assert_eq!(args.day_list(), vec![1, 25]);
        assert!(args.year_list().is_empty());

        let args = parse(&["advent", "days=0"]);
        assert!(args.day_list().is_empty());
        assert!(args.days.is_some());
    }

    #[test]
    fn test_program_name_untouched() {
        let normalized = normalize_args(["debug".to_string(), "debug".to_string()]);
        assert_eq!(normalized, vec!["debug", "--debug"]);
    }

    proptest! {
        #[test]
        fn prop_parse_list_keeps_nonzero_numbers(
            tokens in prop::collection::vec(prop_oneof![
                (0u16..3000).prop_map(|n| n.to_string()),
                "[a-z]{0,4}",
                Just(" 7 ".to_string()),
            ], 0..8)
        ) {
            let expected: Vec<u16> = tokens
                .iter()
                .filter_map(|t| t.trim().parse::<u16>().ok())
                .filter(|&n| n != 0)
                .collect();
            prop_assert_eq!(parse_list::<u16>(&tokens.join(",")), expected);
        }

        #[test]
        fn prop_normalize_args_is_idempotent(
            args in prop::collection::vec(prop_oneof![
                Just("debug".to_string()),
                Just("/Days=3".to_string()),
                Just("-years=2023,2024".to_string()),
                Just("--quiet".to_string()),
                "[a-z=/-]{0,8}",
            ], 0..6)
        ) {
            let once = normalize_args(args);
            let twice = normalize_args(once.clone());
            prop_assert_eq!(once, twice);
        }
    }
}
