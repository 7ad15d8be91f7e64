//! Resolving the input of a day: cache, download, or embedded samples

use crate::cache::InputCache;
use crate::error::InputError;
use advent_http_client::{AdventClient, AdventError};
use advent_solver::{ExecutionMode, FactoryInfo, SolverRegistry};
use zeroize::Zeroizing;

/// Source of puzzle input that is not cached yet
pub trait FetchInput {
    fn fetch_input(&self, year: u16, day: u8, session: &str) -> Result<String, AdventError>;
}

impl FetchInput for AdventClient {
    fn fetch_input(&self, year: u16, day: u8, session: &str) -> Result<String, AdventError> {
        self.get_input(year, day, session)
    }
}

/// Input of one day, ready to be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayInput {
    /// The personal puzzle input, shared by every part
    Puzzle(String),
    /// Embedded samples indexed by `part - 1`; `None` where a part has none
    Sample(Vec<Option<&'static str>>),
}

impl DayInput {
    /// Text that `part` should run against
    pub fn for_part(&self, part: u8) -> Option<&str> {
        match self {
            Self::Puzzle(text) => Some(text.as_str()),
            Self::Sample(samples) => samples
                .get(usize::from(part).checked_sub(1)?)
                .copied()
                .flatten(),
        }
    }
}

/// Cache-first input lookup that downloads and stores on a miss
pub struct InputProvider<F = AdventClient> {
    cache: InputCache,
    fetcher: F,
    session: Option<Zeroizing<String>>,
}

impl<F: FetchInput> InputProvider<F> {
    pub fn new(cache: InputCache, fetcher: F, session: Option<Zeroizing<String>>) -> Self {
        Self {
            cache,
            fetcher,
            session,
        }
    }

    /// Puzzle input for a day
    ///
    /// Served from the cache when present. Otherwise it is downloaded with
    /// the session cookie and persisted before being returned; a failed
    /// download writes nothing.
    pub fn puzzle_input(&self, year: u16, day: u8) -> Result<String, InputError> {
        if let Some(input) = self.cache.get(year, day)? {
            return Ok(input);
        }

        let session = self.session.as_ref().ok_or(InputError::MissingCredential)?;
        log::info!("fetching input for {} day {}", year, day);
        let input = self.fetcher.fetch_input(year, day, session)?;
        self.cache.put(year, day, &input)?;
        Ok(input)
    }

    /// Input for every part of a registered solver in the given mode
    ///
    /// Sample mode reads the embedded samples only and never touches the
    /// cache or the network.
    pub fn resolve(
        &self,
        registry: &SolverRegistry,
        info: FactoryInfo,
        mode: ExecutionMode,
    ) -> Result<DayInput, InputError> {
        match mode {
            ExecutionMode::Puzzle => self.puzzle_input(info.year, info.day).map(DayInput::Puzzle),
            ExecutionMode::Sample => Ok(DayInput::Sample(
                (1..=info.parts)
                    .map(|part| registry.sample(info.year, info.day, part))
                    .collect(),
            )),
        }
    }
}
