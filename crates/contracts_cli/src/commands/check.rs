use anyhow::Result;
use chrono::Local;
use contracts_validator::ContractChecker;
use std::path::Path;
use tracing::{debug, info};

use crate::output::{self, OutputFormat};

/// Runs every scenario against the contracts in `contracts_dir` and prints
/// the report.
///
/// Returns whether every check in every scenario passed.
pub fn execute(contracts_dir: &Path, format: OutputFormat) -> Result<bool> {
    info!("Checking contracts in {}", contracts_dir.display());
    debug!("Output format: {:?}", format);

    let checker = ContractChecker::new(contracts_dir);

    let report = match format {
        OutputFormat::Text => {
            let generated_at = Local::now();
            output::print_header(&generated_at);
            let report = checker.run_with(generated_at, output::print_scenario);
            output::print_summary(&report);
            report
        }
        OutputFormat::Json => {
            let report = checker.run();
            output::print_json_report(&report)?;
            report
        }
    };

    Ok(report.passed())
}
