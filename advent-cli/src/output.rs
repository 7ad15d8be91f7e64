//! Console report for executor messages

use crate::executor::{PartOutcome, Report};
use advent_solver::Verification;
use chrono::TimeDelta;

/// Running totals over every printed report
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub solved: usize,
    pub failed: usize,
    pub mismatched: usize,
    pub skipped: usize,
    pub parse_time: TimeDelta,
    pub solve_time: TimeDelta,
}

impl Summary {
    fn record(&mut self, report: &Report) {
        match report {
            Report::Day { parse, .. } => {
                self.parse_time += parse.unwrap_or_default();
            }
            Report::Part { outcome, .. } => match outcome {
                PartOutcome::Solved {
                    duration,
                    verification,
                    ..
                } => {
                    self.solved += 1;
                    self.solve_time += *duration;
                    if verification.is_mismatch() {
                        self.mismatched += 1;
                    }
                }
                PartOutcome::Failed(_) => self.failed += 1,
                PartOutcome::Skipped => self.skipped += 1,
            },
            Report::Failed { .. } => self.failed += 1,
        }
    }

    /// Nothing failed and no answer contradicted its record
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.mismatched == 0
    }
}

/// Output formatter for solver reports
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
    summary: Summary,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
            summary: Summary::default(),
        }
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Print one report and fold it into the summary
    pub fn print_report(&mut self, report: &Report) {
        self.summary.record(report);
        if self.quiet {
            print_quiet(report);
            return;
        }
        match report {
            Report::Failed { .. } | Report::Part { outcome: PartOutcome::Failed(_), .. } => {
                eprintln!("{}", format_report(report))
            }
            _ => println!("{}", format_report(report)),
        }
    }

    /// Print a summary after all reports
    pub fn print_summary(&self) {
        if self.quiet {
            return;
        }
        let summary = &self.summary;
        println!();
        println!("--- Summary ---");
        println!(
            "Parts: {} solved, {} failed, {} mismatched, {} skipped",
            summary.solved, summary.failed, summary.mismatched, summary.skipped
        );
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// Print in quiet mode (just the answers)
fn print_quiet(report: &Report) {
    match report {
        Report::Part {
            outcome: PartOutcome::Solved { answer, .. },
            ..
        } => println!("{}", answer),
        Report::Part {
            outcome: PartOutcome::Failed(_),
            ..
        }
        | Report::Failed { .. } => eprintln!("{}", format_report(report).trim_start()),
        _ => {}
    }
}

fn part_name(part: u8) -> String {
    match part {
        1 => "one".to_string(),
        2 => "two".to_string(),
        n => n.to_string(),
    }
}

/// Render a report as one or more console lines
pub fn format_report(report: &Report) -> String {
    match report {
        Report::Day { year, day, parse } => match parse {
            Some(d) => format!("Year {} day {} (parse took {})", year, day, format_duration(*d)),
            None => format!("Year {} day {} (nothing parsed)", year, day),
        },
        Report::Failed { year, day, error } => {
            format!("Year {} day {} failed: {}", year, day, error)
        }
        Report::Part { part, outcome, .. } => {
            let name = part_name(*part);
            match outcome {
                PartOutcome::Solved {
                    answer,
                    duration,
                    verification,
                } => {
                    let mut line = format!("  Part {}: {} in {}", name, answer, format_duration(*duration));
                    if !verification.tag().is_empty() {
                        line.push(' ');
                        line.push_str(verification.tag());
                    }
                    if let Verification::Mismatch { expected } = verification {
                        line.push_str(&format!("\n    expected {}, got {}", expected, answer));
                    }
                    line
                }
                PartOutcome::Failed(error) => format!("  Part {} failed: {}", name, error),
                PartOutcome::Skipped => format!("  Part {}: skipped (no sample)", name),
            }
        }
    }
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    TimeDelta::from_std(d).map_or_else(|_| "N/A".to_string(), format_duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved(part: u8, answer: &str, micros: i64, verification: Verification) -> Report {
        Report::Part {
            year: 2023,
            day: 10,
            part,
            outcome: PartOutcome::Solved {
                answer: answer.to_string(),
                duration: TimeDelta::microseconds(micros),
                verification,
            },
        }
    }

    #[test]
    fn test_header_line() {
        let report = Report::Day {
            year: 2023,
            day: 10,
            parse: Some(TimeDelta::microseconds(1200)),
        };
        assert_eq!(format_report(&report), "Year 2023 day 10 (parse took 1.20ms)");
    }

    #[test]
    fn test_part_lines() {
        assert_eq!(
            format_report(&solved(1, "6886", 3410, Verification::Verified)),
            "  Part one: 6886 in 3.41ms (verified)"
        );
        assert_eq!(
            format_report(&solved(2, "371", 15, Verification::Unverified)),
            "  Part two: 371 in 15µs"
        );
        assert_eq!(
            format_report(&solved(1, "6887", 2_500_000, Verification::Mismatch { expected: "6886" })),
            "  Part one: 6887 in 2.50s (error)\n    expected 6886, got 6887"
        );
        assert_eq!(
            format_report(&solved(2, "1", 1, Verification::Pending)),
            "  Part two: 1 in 1µs (tbd)"
        );
    }

    #[test]
    fn test_summary_counts() {
        let mut formatter = OutputFormatter::new(true);
        formatter.print_report(&solved(1, "6886", 10, Verification::Verified));
        assert!(formatter.summary().is_success());

        formatter.print_report(&solved(2, "0", 10, Verification::Mismatch { expected: "371" }));
        formatter.print_report(&Report::Failed {
            year: 2024,
            day: 6,
            error: "no session cookie".into(),
        });
        formatter.print_report(&Report::Part {
            year: 2024,
            day: 14,
            part: 2,
            outcome: PartOutcome::Skipped,
        });

        let summary = formatter.summary();
        assert_eq!((summary.solved, summary.failed, summary.mismatched, summary.skipped), (2, 1, 1, 1));
        assert_eq!(summary.solve_time, TimeDelta::microseconds(20));
        assert!(!summary.is_success());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
        assert_eq!(format_std_duration(std::time::Duration::from_millis(1500)), "1.50s");
    }
}
