//! Configuration resolution from CLI args and the optional settings file

use crate::cli::Args;
use crate::error::CliError;
use advent_solver::ExecutionMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Cache directory used when neither the CLI nor the settings file names one
pub const DEFAULT_CACHE_DIR: &str = "data";

/// Environment variable consulted when the settings file has no cookie
pub const SESSION_ENV: &str = "AOC_SESSION";

/// Contents of the local settings file
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(rename = "SessionCookie")]
    pub session_cookie: Option<String>,
    #[serde(rename = "InputCacheFolder")]
    pub input_cache_folder: Option<PathBuf>,
}

impl Settings {
    /// Read the settings file; a missing file yields empty settings
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no settings file at {}", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&text).map_err(|source| CliError::Settings {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved runtime configuration
pub struct Config {
    /// Puzzle input or embedded samples
    pub mode: ExecutionMode,
    /// Year filter (empty = all years)
    pub years: Vec<u16>,
    /// Day filter (empty = all days)
    pub days: Vec<u8>,
    /// Cache directory path
    pub cache_dir: PathBuf,
    /// Session cookie (zeroized on drop)
    pub session: Option<Zeroizing<String>>,
    /// Number of threads for the global rayon pool
    pub thread_count: usize,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, the settings file and the environment
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let settings = Settings::load(&args.config)?;
        Ok(Self::resolve(args, settings, std::env::var(SESSION_ENV).ok()))
    }

    /// Combine the sources; CLI beats settings file beats defaults
    pub fn resolve(args: Args, mut settings: Settings, env_session: Option<String>) -> Self {
        let session = settings
            .session_cookie
            .take()
            .or(env_session)
            .map(Zeroizing::new)
            .filter(|s| !s.trim().is_empty());

        let cache_dir = args
            .cache_dir
            .clone()
            .or(settings.input_cache_folder)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR));

        Config {
            mode: if args.debug {
                ExecutionMode::Sample
            } else {
                ExecutionMode::Puzzle
            },
            years: args.year_list(),
            days: args.day_list(),
            cache_dir: expand_tilde(&cache_dir),
            session,
            thread_count: args.threads.unwrap_or_else(num_cpus),
            quiet: args.quiet,
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args(list: &[&str]) -> Args {
        Args::try_parse_from(list).unwrap()
    }

    #[test]
    fn test_settings_file_keys() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"SessionCookie": "53616c7465", "InputCacheFolder": "inputs"}}"#
        )
        .unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.session_cookie.as_deref(), Some("53616c7465"));
        assert_eq!(settings.input_cache_folder, Some(PathBuf::from("inputs")));
    }

    #[test]
    fn test_missing_settings_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("absent.json")).unwrap();
        assert!(settings.session_cookie.is_none());
        assert!(settings.input_cache_folder.is_none());
    }

    #[test]
    fn test_malformed_settings_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "SessionCookie=abc").unwrap();
        assert!(matches!(
            Settings::load(file.path()),
            Err(CliError::Settings { .. })
        ));
    }

    #[test]
    fn test_defaults() {
        let config = Config::resolve(args(&["advent"]), Settings::default(), None);
        assert_eq!(config.mode, ExecutionMode::Puzzle);
        assert_eq!(config.cache_dir, PathBuf::from(DEFAULT_CACHE_DIR));
        assert!(config.session.is_none());
        assert!(config.years.is_empty() && config.days.is_empty());
        assert!(config.thread_count >= 1);
    }

    #[test]
    fn test_precedence() {
        let settings = Settings {
            session_cookie: Some("from-file".into()),
            input_cache_folder: Some("file-cache".into()),
        };
        let config = Config::resolve(
            args(&["advent", "--debug", "--cache-dir", "cli-cache"]),
            settings,
            Some("from-env".into()),
        );
        assert_eq!(config.mode, ExecutionMode::Sample);
        assert_eq!(config.cache_dir, PathBuf::from("cli-cache"));
        assert_eq!(config.session.as_deref().map(String::as_str), Some("from-file"));

        let config = Config::resolve(args(&["advent"]), Settings::default(), Some("from-env".into()));
        assert_eq!(config.session.as_deref().map(String::as_str), Some("from-env"));
    }

    #[test]
    fn test_blank_session_is_absent() {
        let config = Config::resolve(args(&["advent"]), Settings::default(), Some("  ".into()));
        assert!(config.session.is_none());
    }

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
        assert_eq!(expand_tilde(Path::new("data")), PathBuf::from("data"));
    }
}
