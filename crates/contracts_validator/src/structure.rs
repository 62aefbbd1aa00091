//! ODCS structure validation.
//!
//! A contract must declare the `dataContractSpecification`, `info`, `schema`
//! and `quality` top-level sections before any scenario check runs.

use contracts_core::{ContractDocument, ContractError, REQUIRED_SECTIONS};

/// Required sections absent from the contract, in canonical order.
pub fn missing_sections(contract: &ContractDocument) -> Vec<String> {
    REQUIRED_SECTIONS
        .iter()
        .filter(|section| !contract.has_section(section))
        .map(|section| section.to_string())
        .collect()
}

/// Validates that every required top-level section is present.
///
/// # Errors
///
/// Returns `ContractError::MissingSections` listing the absent sections.
pub fn validate_structure(contract: &ContractDocument) -> Result<(), ContractError> {
    let missing = missing_sections(contract);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ContractError::MissingSections(missing))
    }
}
