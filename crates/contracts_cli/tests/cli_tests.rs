use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CONTRACT_FILES: [&str; 4] = [
    "rides_contract.yaml",
    "orders_contract.yaml",
    "thermostat_contract.yaml",
    "fintech_contract.yaml",
];

/// Workspace root, where the shipped `datacontracts/` directory lives
fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// Copies the shipped contracts into a temp dir so a test can break one
fn contracts_copy() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for file in CONTRACT_FILES {
        fs::copy(
            workspace_root().join("datacontracts").join(file),
            dir.path().join(file),
        )
        .expect("Failed to copy contract");
    }
    dir
}

fn rewrite(dir: &TempDir, file: &str, from: &str, to: &str) {
    let path = dir.path().join(file);
    let content = fs::read_to_string(&path).expect("Failed to read contract");
    assert!(content.contains(from), "{file} does not contain {from:?}");
    fs::write(&path, content.replacen(from, to, 1)).expect("Failed to write contract");
}

/// Helper to create a Command for the contract-check binary
#[allow(deprecated)]
fn contract_check() -> Command {
    let mut cmd = Command::cargo_bin("contract-check").expect("Failed to find contract-check binary");
    cmd.arg("--no-color");
    cmd
}

// ============================================================================
// passing runs
// ============================================================================

#[test]
fn test_default_directory_passes() {
    contract_check()
        .current_dir(workspace_root())
        .assert()
        .success()
        .stdout(predicate::str::contains("DATA CONTRACT VALIDATION REPORT"))
        .stdout(predicate::str::contains("Generated: "))
        .stdout(predicate::str::contains("--- Validating Scenario 1: Ride-Share ---"))
        .stdout(predicate::str::contains(
            "--- Validating Scenario 4: FinTech Transactions ---",
        ))
        .stdout(predicate::str::contains("✓ ALL VALIDATIONS PASSED"))
        .stdout(predicate::str::contains(
            "All contracts meet assignment requirements!",
        ));
}

#[test]
fn test_report_lists_every_check() {
    let dir = contracts_copy();
    contract_check()
        .arg("--contracts-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[PASS] Rides: All logical field mappings present ✓",
        ))
        .stdout(predicate::str::contains(
            "[PASS] Orders: order_total has minimum: 0 ✓",
        ))
        .stdout(predicate::str::contains(
            "[PASS] Thermostat: Battery range [0.0, 1.0] in schema ✓",
        ))
        .stdout(predicate::str::contains(
            "[PASS] FinTech: Regex pattern ^[A-Z0-9]{10}$ found ✓",
        ))
        .stdout(predicate::str::contains("[FAIL]").not())
        .stdout(predicate::str::contains("Total Checks: 17"))
        .stdout(predicate::str::contains("Passed: 17"))
        .stdout(predicate::str::contains("Failed: 0"));
}

// ============================================================================
// failing runs
// ============================================================================

#[test]
fn test_pii_flag_failure() {
    let dir = contracts_copy();
    rewrite(&dir, "rides_contract.yaml", "      pii: true\n", "      pii: false\n");

    contract_check()
        .arg("-d")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "[FAIL] Rides: PII tagging on passenger_id ✗",
        ))
        .stdout(predicate::str::contains("[PASS] Rides: SLA freshness = 30 minutes ✓"))
        .stdout(predicate::str::contains("Passed: 16"))
        .stdout(predicate::str::contains("Failed: 1"))
        .stdout(predicate::str::contains("✗ SOME VALIDATIONS FAILED"))
        .stdout(predicate::str::contains("Please review the errors above."));
}

#[test]
fn test_missing_quality_section_skips_scenario() {
    let dir = contracts_copy();
    rewrite(&dir, "fintech_contract.yaml", "\nquality:\n", "\nquality_rules:\n");

    contract_check()
        .arg("-d")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "[FAIL] Missing ODCS sections: quality",
        ))
        .stdout(predicate::str::contains("FinTech: Hard circuit breaker").not())
        .stdout(predicate::str::contains("Total Checks: 14"))
        .stdout(predicate::str::contains("Failed: 0"));
}

#[test]
fn test_malformed_yaml_does_not_stop_later_scenarios() {
    let dir = contracts_copy();
    rewrite(
        &dir,
        "orders_contract.yaml",
        "  title: E-commerce Orders\n",
        "  title: E-commerce Orders\n    version: [2.1.0\n",
    );

    contract_check()
        .arg("-d")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[FAIL] YAML syntax error:"))
        .stdout(predicate::str::contains("Orders: Status enum").not())
        .stdout(predicate::str::contains(
            "[PASS] Thermostat: Temperature range quality rule ✓",
        ))
        .stdout(predicate::str::contains(
            "[PASS] FinTech: Hard circuit breaker documented ✓",
        ))
        .stdout(predicate::str::contains("Total Checks: 13"));
}

#[test]
fn test_missing_directory_reports_unreadable_files() {
    let dir = TempDir::new().unwrap();

    contract_check()
        .arg("-d")
        .arg(dir.path().join("nope"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[FAIL] Cannot read contract file:").count(4))
        .stdout(predicate::str::contains("Total Checks: 0"));
}

// ============================================================================
// JSON output
// ============================================================================

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("Failed to run contract-check");
    serde_json::from_slice(&output.stdout).expect("stdout should be a JSON document")
}

#[test]
fn test_json_output_passing() {
    let dir = contracts_copy();
    let report = json_output(
        contract_check()
            .arg("--format")
            .arg("json")
            .arg("-d")
            .arg(dir.path()),
    );

    assert_eq!(report["passed"], true);
    assert_eq!(report["summary"]["total"], 17);
    assert_eq!(report["summary"]["failed"], 0);

    let scenarios = report["scenarios"].as_array().unwrap();
    assert_eq!(scenarios.len(), 4);
    assert_eq!(scenarios[0]["scenario"], "Scenario 1: Ride-Share");
    assert_eq!(scenarios[0]["status"], "checked");
    assert_eq!(scenarios[0]["checks"].as_array().unwrap().len(), 6);
    assert_eq!(
        scenarios[3]["checks"][1]["label"],
        "FinTech: Hard circuit breaker enforcement"
    );
}

#[test]
fn test_json_output_failing() {
    let dir = contracts_copy();
    fs::remove_file(dir.path().join("thermostat_contract.yaml")).unwrap();
    rewrite(&dir, "orders_contract.yaml", "dataContractSpecification: 0.9.3\n", "");

    contract_check()
        .arg("-f")
        .arg("json")
        .arg("-d")
        .arg(dir.path())
        .assert()
        .code(1);

    let report = json_output(
        contract_check()
            .arg("-f")
            .arg("json")
            .arg("-d")
            .arg(dir.path()),
    );

    assert_eq!(report["passed"], false);
    assert_eq!(report["scenarios"][1]["status"], "missing_sections");
    assert_eq!(
        report["scenarios"][1]["missing_sections"],
        serde_json::json!(["dataContractSpecification"])
    );
    assert_eq!(report["scenarios"][2]["status"], "unreadable");
    assert!(report["scenarios"][2]["error"].is_string());
    assert_eq!(report["summary"]["total"], 9);
}

#[test]
fn test_invalid_format_is_rejected() {
    contract_check()
        .arg("--format")
        .arg("xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));
}
