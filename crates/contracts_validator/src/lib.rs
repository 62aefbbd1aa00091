//! # Data Contract Checker Validator
//!
//! Validation logic for the scenario data contracts:
//!
//! - Structure validation (required ODCS top-level sections)
//! - Named predicates over properties, SLA and quality rules
//! - The four fixed scenario batteries
//! - The `ContractChecker` engine that runs them in order
//!
//! ## Example
//!
//! ```rust
//! use contracts_parser::parse_yaml;
//! use contracts_validator::{Scenario, validate_structure};
//!
//! let contract = parse_yaml(
//!     r#"
//! dataContractSpecification: 0.9.3
//! info: { title: Orders }
//! schema:
//!   properties:
//!     order_total: { type: number, minimum: 0 }
//! quality: []
//! "#,
//! )
//! .unwrap();
//!
//! assert!(validate_structure(&contract).is_ok());
//!
//! let checks = Scenario::Orders.validate(&contract);
//! assert!(checks[0].passed);
//! ```

mod engine;
pub mod predicates;
mod scenarios;
mod structure;

pub use engine::*;
pub use scenarios::*;
pub use structure::*;
