//! Check results and run reports.
//!
//! A run is a fixed sequence of scenarios. Each scenario either gets checked
//! and yields an ordered list of [`CheckResult`]s, or is skipped because its
//! file could not be read, parsed, or lacks required sections. Totals are
//! always derived from the collected reports, never tracked separately.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of a single named check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Human-readable label, printed verbatim
    pub label: String,

    /// Whether the check passed
    pub passed: bool,
}

impl CheckResult {
    /// Creates a new check result.
    pub fn new(label: impl Into<String>, passed: bool) -> Self {
        Self {
            label: label.into(),
            passed,
        }
    }
}

/// What happened when a scenario was processed.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioOutcome {
    /// All scenario checks ran
    Checked(Vec<CheckResult>),

    /// The contract file could not be read
    Unreadable(String),

    /// The contract file is not valid YAML
    SyntaxError(String),

    /// Required top-level sections are absent
    MissingSections(Vec<String>),
}

impl ScenarioOutcome {
    /// Short machine-readable status name.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Checked(_) => "checked",
            Self::Unreadable(_) => "unreadable",
            Self::SyntaxError(_) => "syntax_error",
            Self::MissingSections(_) => "missing_sections",
        }
    }
}

/// Report for one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    /// Scenario title, e.g. "Scenario 1: Ride-Share"
    pub scenario: String,

    /// Contract file that was checked
    pub file: PathBuf,

    pub outcome: ScenarioOutcome,
}

impl ScenarioReport {
    /// Creates a new scenario report.
    pub fn new(scenario: impl Into<String>, file: impl Into<PathBuf>, outcome: ScenarioOutcome) -> Self {
        Self {
            scenario: scenario.into(),
            file: file.into(),
            outcome,
        }
    }

    /// Checks that ran; empty when the scenario was skipped.
    pub fn checks(&self) -> &[CheckResult] {
        match &self.outcome {
            ScenarioOutcome::Checked(checks) => checks,
            _ => &[],
        }
    }

    /// Whether the scenario was checked and every check passed.
    pub fn passed(&self) -> bool {
        match &self.outcome {
            ScenarioOutcome::Checked(checks) => checks.iter().all(|check| check.passed),
            _ => false,
        }
    }

    /// Counts for this scenario alone.
    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for check in self.checks() {
            summary.record(check.passed);
        }
        summary
    }
}

/// Aggregate check counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Records one check outcome.
    pub fn record(&mut self, passed: bool) {
        self.total += 1;
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Adds another summary into this one.
    pub fn merge(&mut self, other: RunSummary) {
        self.total += other.total;
        self.passed += other.passed;
        self.failed += other.failed;
    }
}

/// Report of a full checker run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// When the run started
    pub generated_at: DateTime<Local>,

    /// Per-scenario reports, in run order
    pub scenarios: Vec<ScenarioReport>,
}

impl RunReport {
    /// Creates an empty report stamped with the given time.
    pub fn new(generated_at: DateTime<Local>) -> Self {
        Self {
            generated_at,
            scenarios: Vec::new(),
        }
    }

    /// Appends a scenario report.
    pub fn push(&mut self, report: ScenarioReport) {
        self.scenarios.push(report);
    }

    /// Totals across every scenario.
    pub fn summary(&self) -> RunSummary {
        self.scenarios
            .iter()
            .fold(RunSummary::default(), |mut acc, scenario| {
                acc.merge(scenario.summary());
                acc
            })
    }

    /// Whether every scenario was checked and every check passed.
    ///
    /// A run with no scenarios passes.
    pub fn passed(&self) -> bool {
        self.scenarios.iter().all(ScenarioReport::passed)
    }
}
