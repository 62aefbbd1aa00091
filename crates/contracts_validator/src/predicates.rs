//! Named predicates over contract documents.
//!
//! Every scenario check is built from these predicates. Several of them match
//! free-form text (`expression`, `name`, `description`) by substring, which
//! couples the checker to how contracts are worded; keeping each predicate named
//! and tested on its own makes that coupling explicit.

use contracts_core::ContractDocument;
use serde_yaml_ng::Value;

/// Every named field is declared in `schema.properties`.
pub fn has_all_properties(contract: &ContractDocument, fields: &[&str]) -> bool {
    fields.iter().all(|field| contract.has_property(field))
}

/// The field's `pii` attribute is the boolean `true`.
pub fn is_pii_tagged(contract: &ContractDocument, field: &str) -> bool {
    contract.property(field).pii() == Some(true)
}

/// `sla.<metric>.threshold` is exactly the expected string.
pub fn sla_threshold_equals(contract: &ContractDocument, metric: &str, expected: &str) -> bool {
    contract.sla_threshold(metric) == Some(expected)
}

/// Some quality rule's expression contains every fragment.
pub fn any_expression_contains_all(contract: &ContractDocument, fragments: &[&str]) -> bool {
    contract.quality_rules().any(|rule| {
        let expression = rule.expression();
        fragments.iter().all(|fragment| expression.contains(fragment))
    })
}

/// Some quality rule's expression contains at least one fragment.
pub fn any_expression_contains_any(contract: &ContractDocument, fragments: &[&str]) -> bool {
    contract.quality_rules().any(|rule| {
        let expression = rule.expression();
        fragments.iter().any(|fragment| expression.contains(fragment))
    })
}

/// Some quality rule's name contains the fragment, ignoring case.
pub fn any_rule_name_contains_ci(contract: &ContractDocument, fragment: &str) -> bool {
    let fragment = fragment.to_lowercase();
    contract
        .quality_rules()
        .any(|rule| rule.name().to_lowercase().contains(&fragment))
}

/// Some quality rule's column contains the fragment.
pub fn any_rule_column_contains(contract: &ContractDocument, fragment: &str) -> bool {
    contract
        .quality_rules()
        .any(|rule| rule.column().contains(fragment))
}

/// Numeric equality on a YAML scalar.
///
/// Integers and floats compare by value, so `0` and `0.0` both equal `0.0`.
/// Strings, booleans and nulls never equal a number.
pub fn numeric_equals(value: Option<&Value>, expected: f64) -> bool {
    match value {
        Some(Value::Number(number)) => number.as_f64() == Some(expected),
        _ => false,
    }
}

/// The field's `minimum` equals `expected`.
pub fn minimum_equals(contract: &ContractDocument, field: &str, expected: f64) -> bool {
    numeric_equals(contract.property(field).minimum(), expected)
}

/// The field's `minimum` and `maximum` equal the given bounds.
pub fn bounds_equal(contract: &ContractDocument, field: &str, minimum: f64, maximum: f64) -> bool {
    let property = contract.property(field);
    numeric_equals(property.minimum(), minimum) && numeric_equals(property.maximum(), maximum)
}

/// The field declares an `enum`.
pub fn has_enum(contract: &ContractDocument, field: &str) -> bool {
    contract.property(field).has_enum()
}

/// Some property whose name contains `name_fragment` (ignoring case) has a
/// `pattern` containing `pattern` literally.
pub fn any_property_pattern_contains(
    contract: &ContractDocument,
    name_fragment: &str,
    pattern: &str,
) -> bool {
    let name_fragment = name_fragment.to_lowercase();
    contract.iter_properties().any(|(name, property)| {
        name.to_lowercase().contains(&name_fragment)
            && property.pattern().is_some_and(|p| p.contains(pattern))
    })
}

/// Some quality rule has exactly this enforcement level.
pub fn any_enforcement_equals(contract: &ContractDocument, level: &str) -> bool {
    contract
        .quality_rules()
        .any(|rule| rule.enforcement() == level)
}

/// Some quality rule's description mentions blocking or a circuit breaker.
pub fn any_description_mentions_circuit_breaker(contract: &ContractDocument) -> bool {
    contract.quality_rules().any(|rule| {
        let description = rule.description();
        description.to_uppercase().contains("BLOCK") || description.to_lowercase().contains("circuit")
    })
}
