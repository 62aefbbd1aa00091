//! Error types for data contracts.

use thiserror::Error;

/// Result type for data contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;

/// Main error type for contract structure problems.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// One or more required top-level sections are absent
    #[error("Missing ODCS sections: {}", .0.join(", "))]
    MissingSections(Vec<String>),
}
