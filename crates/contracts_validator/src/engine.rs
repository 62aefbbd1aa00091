//! Checker engine.
//!
//! This module provides the `ContractChecker` that drives the fixed scenario
//! sequence: load each contract, check its structure, then run the scenario
//! battery.

use crate::{Scenario, validate_structure};
use chrono::{DateTime, Local};
use contracts_core::{ContractError, RunReport, ScenarioOutcome, ScenarioReport};
use contracts_parser::{ParserError, parse_file};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Directory the scenario contracts are read from by default.
pub const DEFAULT_CONTRACTS_DIR: &str = "datacontracts";

/// Runs the scenario checks against a directory of contracts.
///
/// # Example
///
/// ```no_run
/// use contracts_validator::ContractChecker;
///
/// let checker = ContractChecker::new("datacontracts");
/// let report = checker.run();
///
/// let summary = report.summary();
/// println!("{}/{} checks passed", summary.passed, summary.total);
/// ```
#[derive(Debug, Clone)]
pub struct ContractChecker {
    contracts_dir: PathBuf,
}

impl ContractChecker {
    /// Creates a checker reading contracts from `contracts_dir`.
    pub fn new(contracts_dir: impl Into<PathBuf>) -> Self {
        Self {
            contracts_dir: contracts_dir.into(),
        }
    }

    pub fn contracts_dir(&self) -> &Path {
        &self.contracts_dir
    }

    /// Path of a scenario's contract file.
    pub fn contract_path(&self, scenario: Scenario) -> PathBuf {
        self.contracts_dir.join(scenario.file_name())
    }

    /// Checks a single scenario.
    ///
    /// An unreadable file, a YAML syntax error or missing sections skip the
    /// scenario's checks; nothing here aborts the run.
    pub fn check_scenario(&self, scenario: Scenario) -> ScenarioReport {
        let path = self.contract_path(scenario);
        info!("Validating {} ({})", scenario.title(), path.display());

        let outcome = match parse_file(&path) {
            Err(ParserError::IoError(err)) => {
                warn!("Cannot read {}: {}", path.display(), err);
                ScenarioOutcome::Unreadable(err.to_string())
            }
            Err(ParserError::YamlError(err)) => {
                warn!("YAML syntax error in {}: {}", path.display(), err);
                ScenarioOutcome::SyntaxError(err.to_string())
            }
            Ok(contract) => match validate_structure(&contract) {
                Err(ContractError::MissingSections(missing)) => {
                    warn!(
                        "{} is missing sections: {}",
                        path.display(),
                        missing.join(", ")
                    );
                    ScenarioOutcome::MissingSections(missing)
                }
                Ok(()) => {
                    let checks = scenario.validate(&contract);
                    debug!(
                        "{}: {}/{} checks passed",
                        scenario.title(),
                        checks.iter().filter(|check| check.passed).count(),
                        checks.len()
                    );
                    ScenarioOutcome::Checked(checks)
                }
            },
        };

        ScenarioReport::new(scenario.title(), path, outcome)
    }

    /// Runs every scenario in order and returns the combined report.
    pub fn run(&self) -> RunReport {
        self.run_with(Local::now(), |_| {})
    }

    /// Like [`run`](Self::run), stamping the report with `generated_at` and
    /// calling `on_scenario` as soon as each scenario finishes.
    pub fn run_with(
        &self,
        generated_at: DateTime<Local>,
        mut on_scenario: impl FnMut(&ScenarioReport),
    ) -> RunReport {
        let mut report = RunReport::new(generated_at);

        for scenario in Scenario::ALL {
            let scenario_report = self.check_scenario(scenario);
            on_scenario(&scenario_report);
            report.push(scenario_report);
        }

        let summary = report.summary();
        info!(
            "Run finished: {} checks, {} passed, {} failed",
            summary.total, summary.passed, summary.failed
        );

        report
    }
}

impl Default for ContractChecker {
    fn default() -> Self {
        Self::new(DEFAULT_CONTRACTS_DIR)
    }
}
