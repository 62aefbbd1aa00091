//! # Data Contract Checker Core
//!
//! Core types shared by the contract checker crates.
//!
//! A data contract is a YAML document describing a dataset: its specification
//! version, descriptive `info`, the `schema` of its fields, the `quality` rules
//! the data must satisfy and, optionally, an `sla`.
//!
//! ## Key Concepts
//!
//! - **ContractDocument**: read-only, safe-lookup view over a parsed contract
//! - **Property / QualityRule**: views over `schema.properties` entries and `quality` rules
//! - **CheckResult**: a labelled pass/fail outcome
//! - **RunReport**: per-scenario outcomes with derived totals
//!
//! ## Example
//!
//! ```rust
//! use contracts_core::{CheckResult, ContractDocument, REQUIRED_SECTIONS};
//!
//! let contract = ContractDocument::new(
//!     serde_yaml_ng::from_str("info:\n  title: Orders\n").unwrap(),
//! );
//!
//! let present: Vec<&str> = REQUIRED_SECTIONS
//!     .into_iter()
//!     .filter(|section| contract.has_section(section))
//!     .collect();
//! let result = CheckResult::new("info section present", present == ["info"]);
//! assert!(result.passed);
//! ```

pub mod contract;
pub mod error;
pub mod report;

pub use contract::*;
pub use error::*;
pub use report::*;
