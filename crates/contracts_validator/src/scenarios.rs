//! Scenario validators.
//!
//! Each scenario pairs one contract file with a fixed battery of checks. The
//! set is closed: the checker always runs the four scenarios of
//! [`Scenario::ALL`] in order.

use crate::predicates::*;
use contracts_core::{CheckResult, ContractDocument};

/// The account identifier pattern FinTech contracts must declare.
pub const ACCOUNT_ID_PATTERN: &str = "^[A-Z0-9]{10}$";

/// Fields the ride-share contract maps from its source system.
pub const RIDES_LOGICAL_FIELDS: [&str; 6] = [
    "ride_id",
    "pickup_timestamp",
    "passenger_id",
    "driver_rating",
    "fare_amount",
    "distance_meters",
];

/// A fixed validation scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Rides,
    Orders,
    Thermostat,
    Fintech,
}

impl Scenario {
    /// All scenarios, in run order.
    pub const ALL: [Scenario; 4] = [
        Scenario::Rides,
        Scenario::Orders,
        Scenario::Thermostat,
        Scenario::Fintech,
    ];

    /// Contract file name, relative to the contracts directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Scenario::Rides => "rides_contract.yaml",
            Scenario::Orders => "orders_contract.yaml",
            Scenario::Thermostat => "thermostat_contract.yaml",
            Scenario::Fintech => "fintech_contract.yaml",
        }
    }

    /// Title printed in the report.
    pub fn title(self) -> &'static str {
        match self {
            Scenario::Rides => "Scenario 1: Ride-Share",
            Scenario::Orders => "Scenario 2: E-commerce Orders",
            Scenario::Thermostat => "Scenario 3: IoT Thermostat",
            Scenario::Fintech => "Scenario 4: FinTech Transactions",
        }
    }

    /// Runs this scenario's checks against a contract.
    pub fn validate(self, contract: &ContractDocument) -> Vec<CheckResult> {
        match self {
            Scenario::Rides => validate_rides(contract),
            Scenario::Orders => validate_orders(contract),
            Scenario::Thermostat => validate_thermostat(contract),
            Scenario::Fintech => validate_fintech(contract),
        }
    }
}

/// Scenario 1: ride-share field mappings, PII tagging, freshness SLA and
/// quality rules.
pub fn validate_rides(contract: &ContractDocument) -> Vec<CheckResult> {
    vec![
        CheckResult::new(
            "Rides: All logical field mappings present",
            has_all_properties(contract, &RIDES_LOGICAL_FIELDS),
        ),
        CheckResult::new(
            "Rides: PII tagging on passenger_id",
            is_pii_tagged(contract, "passenger_id"),
        ),
        CheckResult::new(
            "Rides: SLA freshness = 30 minutes",
            sla_threshold_equals(contract, "freshness", "30 minutes"),
        ),
        CheckResult::new(
            "Rides: Quality rule 'fare_amount_non_negative' found",
            any_expression_contains_all(contract, &["fare_amount", ">= 0"]),
        ),
        CheckResult::new(
            "Rides: Quality rule 'driver_rating_range' found",
            any_expression_contains_all(contract, &["driver_rating"]),
        ),
        CheckResult::new(
            "Rides: Quality rule 'distance_not_null' found",
            any_rule_name_contains_ci(contract, "distance")
                || any_rule_column_contains(contract, "distance_meters"),
        ),
    ]
}

/// Scenario 2: e-commerce order totals and status mapping.
pub fn validate_orders(contract: &ContractDocument) -> Vec<CheckResult> {
    vec![
        CheckResult::new(
            "Orders: order_total has minimum: 0",
            minimum_equals(contract, "order_total", 0.0),
        ),
        CheckResult::new(
            "Orders: Status enum correctly mapped",
            has_enum(contract, "status"),
        ),
        CheckResult::new(
            "Orders: Non-negative order_total rule",
            any_expression_contains_all(contract, &["order_total", ">= 0"]),
        ),
        CheckResult::new(
            "Orders: Status code validation rule",
            any_expression_contains_any(contract, &["status_code", "status"]),
        ),
    ]
}

/// Scenario 3: IoT sensor ranges in both schema and quality rules.
pub fn validate_thermostat(contract: &ContractDocument) -> Vec<CheckResult> {
    vec![
        CheckResult::new(
            "Thermostat: Temperature range [-30, 60] in schema",
            bounds_equal(contract, "temperature_c", -30.0, 60.0),
        ),
        CheckResult::new(
            "Thermostat: Battery range [0.0, 1.0] in schema",
            bounds_equal(contract, "battery_level", 0.0, 1.0),
        ),
        CheckResult::new(
            "Thermostat: Temperature range quality rule",
            any_expression_contains_all(contract, &["temperature_c", ">= -30", "<= 60"]),
        ),
        CheckResult::new(
            "Thermostat: Battery level quality rule",
            any_expression_contains_all(contract, &["battery_level"]),
        ),
    ]
}

/// Scenario 4: FinTech account format and hard circuit breaker.
pub fn validate_fintech(contract: &ContractDocument) -> Vec<CheckResult> {
    vec![
        CheckResult::new(
            format!("FinTech: Regex pattern {ACCOUNT_ID_PATTERN} found"),
            any_property_pattern_contains(contract, "account", ACCOUNT_ID_PATTERN),
        ),
        CheckResult::new(
            "FinTech: Hard circuit breaker enforcement",
            any_enforcement_equals(contract, "hard"),
        ),
        CheckResult::new(
            "FinTech: Hard circuit breaker documented",
            any_description_mentions_circuit_breaker(contract),
        ),
    ]
}
