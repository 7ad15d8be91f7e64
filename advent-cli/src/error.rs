//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Settings file exists but is not valid JSON
    #[error("Invalid settings file {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] advent_http_client::AdventError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] advent_solver::RegistrationError),

    /// Global thread pool could not be configured
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Executor error
    #[error("{0}")]
    Executor(#[from] ExecutorError),
}

/// Executor-specific errors
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// The receiving side hung up
    #[error("Channel send error")]
    ChannelSend,

    /// The executor thread itself panicked
    #[error("Executor thread panicked")]
    Panicked,
}

/// Failure to obtain the input of one day
#[derive(Error, Debug)]
pub enum InputError {
    /// Not cached and no session cookie to download it with
    #[error("no session cookie configured (set SessionCookie or AOC_SESSION)")]
    MissingCredential,

    /// Download failed
    #[error("fetching input failed: {0}")]
    Fetch(#[from] advent_http_client::AdventError),

    /// Cache could not be read or written
    #[error("input cache failed: {0}")]
    Cache(#[from] CacheError),
}

/// Cache-specific errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache directory creation failed
    #[error("Cache directory creation failed: {0}")]
    DirCreation(String),

    /// The temporary file could not be moved into place
    #[error("Persisting cache entry failed: {0}")]
    Persist(#[from] tempfile::PersistError),
}
