//! Sequential executor streaming per-day reports to the printing thread

use crate::config::Config;
use crate::error::ExecutorError;
use crate::input::{FetchInput, InputProvider};
use advent_http_client::AdventClient;
use advent_solver::{DynSolver, ExecutionMode, FactoryInfo, SolverRegistry, Verification};
use chrono::TimeDelta;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::Sender;

/// Outcome of one part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartOutcome {
    Solved {
        answer: String,
        duration: TimeDelta,
        verification: Verification,
    },
    /// Parse or solve failure, panics included
    Failed(String),
    /// Sample mode and the part has no embedded sample
    Skipped,
}

/// Message sent from the executor thread for printing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Header of a day; `parse` is `None` when nothing was parsed
    Day {
        year: u16,
        day: u8,
        parse: Option<TimeDelta>,
    },
    Part {
        year: u16,
        day: u8,
        part: u8,
        outcome: PartOutcome,
    },
    /// The day's input could not be obtained; none of its parts ran
    Failed { year: u16, day: u8, error: String },
}

/// Runs the selected solvers one after another
pub struct Executor<F = AdventClient> {
    registry: SolverRegistry,
    provider: InputProvider<F>,
    mode: ExecutionMode,
    years: Vec<u16>,
    days: Vec<u8>,
}

impl<F: FetchInput> Executor<F> {
    pub fn new(registry: SolverRegistry, provider: InputProvider<F>, config: &Config) -> Self {
        Self {
            registry,
            provider,
            mode: config.mode,
            years: config.years.clone(),
            days: config.days.clone(),
        }
    }

    /// Registered solvers passing the year and day filters, in (year, day) order
    pub fn selected(&self) -> Vec<FactoryInfo> {
        self.registry
            .iter_info()
            .filter(|info| self.years.is_empty() || self.years.contains(&info.year))
            .filter(|info| self.days.is_empty() || self.days.contains(&info.day))
            .collect()
    }

    /// Run every selected solver, sending reports as they are produced
    ///
    /// Failures are reported and scoped to their day; only a closed channel
    /// stops the run.
    pub fn execute(&self, tx: Sender<Report>) -> Result<(), ExecutorError> {
        for info in self.selected() {
            self.run_day(info, &tx)?;
        }
        Ok(())
    }

    fn run_day(&self, info: FactoryInfo, tx: &Sender<Report>) -> Result<(), ExecutorError> {
        let (year, day) = (info.year, info.day);
        let send = |report: Report| tx.send(report).map_err(|_| ExecutorError::ChannelSend);

        let input = match self.provider.resolve(&self.registry, info, self.mode) {
            Ok(input) => input,
            Err(e) => {
                log::warn!("{} day {}: {}", year, day, e);
                return send(Report::Failed {
                    year,
                    day,
                    error: e.to_string(),
                });
            }
        };

        // parts running against identical text share one parsed instance
        let mut instances: Vec<(&str, Result<Box<dyn DynSolver + '_>, String>)> = Vec::new();
        let mut header_sent = false;

        for part in 1..=info.parts {
            let Some(text) = input.for_part(part) else {
                if !header_sent {
                    send(Report::Day { year, day, parse: None })?;
                    header_sent = true;
                }
                send(Report::Part {
                    year,
                    day,
                    part,
                    outcome: PartOutcome::Skipped,
                })?;
                continue;
            };

            let index = match instances.iter().position(|(t, _)| *t == text) {
                Some(index) => index,
                None => {
                    let created = self.create_solver(info, text);
                    if let Ok(solver) = &created {
                        log::debug!(
                            "{} day {} part {} parsed in {}µs",
                            year,
                            day,
                            part,
                            solver.parse_duration().num_microseconds().unwrap_or(0)
                        );
                    }
                    if !header_sent {
                        let parse = created.as_ref().ok().map(|s| s.parse_duration());
                        send(Report::Day { year, day, parse })?;
                        header_sent = true;
                    }
                    instances.push((text, created));
                    instances.len() - 1
                }
            };

            let outcome = match &mut instances[index].1 {
                Ok(solver) => self.solve_part(info, solver.as_mut(), part),
                Err(e) => PartOutcome::Failed(e.clone()),
            };
            send(Report::Part {
                year,
                day,
                part,
                outcome,
            })?;
        }
        Ok(())
    }

    fn create_solver<'a>(
        &self,
        info: FactoryInfo,
        text: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, String> {
        let created = panic::catch_unwind(AssertUnwindSafe(|| {
            self.registry
                .create_solver(info.year, info.day, text, self.mode)
        }));
        match created {
            Ok(Ok(solver)) => Ok(solver),
            Ok(Err(e)) => Err(e.to_string()),
            Err(payload) => Err(format!("parse panicked: {}", panic_message(&*payload))),
        }
    }

    fn solve_part(&self, info: FactoryInfo, solver: &mut dyn DynSolver, part: u8) -> PartOutcome {
        match panic::catch_unwind(AssertUnwindSafe(|| solver.solve(part))) {
            Ok(Ok(result)) => {
                let expected = self.registry.expected(info.year, info.day, part);
                let verification = Verification::of(expected.as_ref(), &result.answer, self.mode);
                if let Verification::Mismatch { expected } = verification {
                    log::warn!(
                        "{} day {} part {}: expected {}, got {}",
                        info.year,
                        info.day,
                        part,
                        expected,
                        result.answer
                    );
                }
                PartOutcome::Solved {
                    duration: result.duration(),
                    answer: result.answer,
                    verification,
                }
            }
            Ok(Err(e)) => PartOutcome::Failed(e.to_string()),
            Err(payload) => PartOutcome::Failed(format!("panicked: {}", panic_message(&*payload))),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
