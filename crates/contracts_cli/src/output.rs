use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::ValueEnum;
use colored::*;
use contracts_core::{ContractError, RunReport, ScenarioOutcome, ScenarioReport};
use serde_json::{Value, json};

const RULE_WIDTH: usize = 60;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn print_header(generated_at: &DateTime<Local>) {
    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("{}", "DATA CONTRACT VALIDATION REPORT".bold());
    println!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S"));
    println!("{}\n", "=".repeat(RULE_WIDTH));
}

/// Prints one scenario block. Only fully checked scenarios end with a blank
/// line.
pub fn print_scenario(report: &ScenarioReport) {
    println!("--- Validating {} ---", report.scenario);

    match &report.outcome {
        ScenarioOutcome::Unreadable(message) => {
            print_failure(&format!("Cannot read contract file: {}", message));
        }
        ScenarioOutcome::SyntaxError(message) => {
            print_failure(&format!("YAML syntax error: {}", message));
        }
        ScenarioOutcome::MissingSections(missing) => {
            print_failure(&ContractError::MissingSections(missing.clone()).to_string());
        }
        ScenarioOutcome::Checked(checks) => {
            for check in checks {
                if check.passed {
                    println!("{} {} {}", "[PASS]".green(), check.label, "✓".green());
                } else {
                    println!("{} {} {}", "[FAIL]".red(), check.label, "✗".red());
                }
            }
            println!();
        }
    }
}

fn print_failure(message: &str) {
    println!("{} {}", "[FAIL]".red(), message.red());
}

pub fn print_summary(report: &RunReport) {
    let summary = report.summary();

    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{}", "VALIDATION SUMMARY".bold());
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Total Checks: {}", summary.total);
    println!("Passed: {}", summary.passed);
    println!("Failed: {}", summary.failed);
    println!();

    if report.passed() {
        println!("{}", "✓ ALL VALIDATIONS PASSED".green().bold());
        println!("All contracts meet assignment requirements!");
    } else {
        println!("{}", "✗ SOME VALIDATIONS FAILED".red().bold());
        println!("Please review the errors above.");
    }
}

pub fn print_json_report(report: &RunReport) -> Result<()> {
    let output = json!({
        "generated_at": report.generated_at.to_rfc3339(),
        "passed": report.passed(),
        "scenarios": report.scenarios.iter().map(scenario_json).collect::<Vec<_>>(),
        "summary": report.summary(),
    });

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to serialize report")?
    );
    Ok(())
}

fn scenario_json(report: &ScenarioReport) -> Value {
    let mut value = json!({
        "scenario": report.scenario,
        "file": report.file.display().to_string(),
        "status": report.outcome.status(),
        "passed": report.passed(),
        "checks": report.checks(),
    });

    match &report.outcome {
        ScenarioOutcome::Unreadable(message) | ScenarioOutcome::SyntaxError(message) => {
            value["error"] = json!(message);
        }
        ScenarioOutcome::MissingSections(missing) => {
            value["missing_sections"] = json!(missing);
        }
        ScenarioOutcome::Checked(_) => {}
    }

    value
}
