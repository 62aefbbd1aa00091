//! YAML loader and syntax validator for data contracts.
//!
//! This module reads contract files and parses them into a
//! [`ContractDocument`]. Parsing is deliberately schema-less: any valid
//! single-document YAML loads, and structural expectations are checked later
//! by the validator.
//!
//! # Example
//!
//! ```rust
//! use contracts_parser::parse_yaml;
//!
//! let yaml = r#"
//! dataContractSpecification: 0.9.3
//! info:
//!   title: Ride events
//! schema:
//!   properties:
//!     ride_id:
//!       type: string
//! quality: []
//! "#;
//!
//! let contract = parse_yaml(yaml).expect("Failed to parse contract");
//! assert!(contract.has_property("ride_id"));
//! ```

use contracts_core::ContractDocument;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a contract.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML syntax error
    #[error("{0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// File I/O error
    #[error("{0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Parse a contract from a YAML string.
///
/// Exactly one YAML document is accepted; an empty string yields a document
/// whose root is `null`. Merge keys (`<<: *anchor`) are resolved, so shared
/// attributes read as if written inline.
///
/// # Example
///
/// ```rust
/// use contracts_parser::parse_yaml;
///
/// assert!(parse_yaml("info: {title: Orders}").is_ok());
/// assert!(parse_yaml("info:\n  title: [unclosed").is_err());
/// ```
pub fn parse_yaml(content: &str) -> Result<ContractDocument> {
    if content.trim().is_empty() {
        return Ok(serde_yaml_ng::Value::Null.into());
    }

    let mut root: serde_yaml_ng::Value = serde_yaml_ng::from_str(content)?;
    root.apply_merge()?;
    Ok(root.into())
}

/// Read and parse a contract file.
///
/// # Errors
///
/// Returns `ParserError::IoError` if the file cannot be read and
/// `ParserError::YamlError` if its content is not valid YAML.
pub fn parse_file(path: &Path) -> Result<ContractDocument> {
    debug!("Reading contract file {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

/// Check that a file contains syntactically valid YAML.
///
/// Returns `Ok(())` on success, or the error describing why the file could
/// not be read or parsed.
pub fn validate_yaml_syntax(path: &Path) -> Result<()> {
    parse_file(path).map(|_| ())
}
