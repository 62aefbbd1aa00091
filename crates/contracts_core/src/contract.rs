//! Contract document model.
//!
//! Scenario contracts are loosely structured YAML documents, so instead of a
//! rigid serde model this module wraps the parsed [`Value`] tree and exposes
//! safe, read-only views over the parts the checks care about: top-level
//! sections, `schema.properties` and the `quality` rule list.
//!
//! Every lookup treats a missing key, or a value of the wrong YAML kind, as
//! empty. A check built on top of a missing value simply evaluates to `false`.

use serde_yaml_ng::{Mapping, Value};

/// Top-level sections every contract must declare.
pub const REQUIRED_SECTIONS: [&str; 4] = ["dataContractSpecification", "info", "schema", "quality"];

/// A parsed data contract.
///
/// # Example
///
/// ```rust
/// use contracts_core::ContractDocument;
///
/// let root = serde_yaml_ng::from_str(
///     r#"
/// schema:
///   properties:
///     passenger_id:
///       type: string
///       pii: true
/// quality:
///   - name: fare_non_negative
///     expression: "fare_amount >= 0"
/// "#,
/// )
/// .unwrap();
/// let contract = ContractDocument::new(root);
///
/// assert_eq!(contract.property("passenger_id").pii(), Some(true));
/// assert_eq!(contract.quality_rules().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ContractDocument {
    root: Value,
}

impl ContractDocument {
    /// Wraps an already parsed YAML value.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Whether the document root is a mapping. Scalars, sequences and empty
    /// documents have no sections.
    pub fn is_mapping(&self) -> bool {
        self.root.is_mapping()
    }

    /// Membership test on the top-level mapping. A key present with a `null`
    /// value still counts as present.
    pub fn has_section(&self, key: &str) -> bool {
        self.root
            .as_mapping()
            .is_some_and(|mapping| mapping.contains_key(key))
    }

    /// Returns a top-level section, if present.
    pub fn section(&self, key: &str) -> Option<&Value> {
        self.root.as_mapping()?.get(key)
    }

    /// Returns `schema.properties` when it is a mapping.
    pub fn properties(&self) -> Option<&Mapping> {
        self.section("schema")?.get("properties")?.as_mapping()
    }

    /// Whether `schema.properties` declares a field with the given name.
    pub fn has_property(&self, name: &str) -> bool {
        self.properties()
            .is_some_and(|properties| properties.contains_key(name))
    }

    /// Returns a view over a single schema property.
    ///
    /// The view is always returned; a missing property behaves as one with no
    /// attributes.
    pub fn property(&self, name: &str) -> Property<'_> {
        Property::from_value(self.properties().and_then(|properties| properties.get(name)))
    }

    /// Iterates over every property with a string name, in document order.
    pub fn iter_properties(&self) -> impl Iterator<Item = (&str, Property<'_>)> {
        self.properties()
            .into_iter()
            .flat_map(|properties| properties.iter())
            .filter_map(|(name, attrs)| Some((name.as_str()?, Property::from_value(Some(attrs)))))
    }

    /// Iterates over the entries of the `quality` sequence.
    ///
    /// Yields nothing when `quality` is missing or is not a sequence.
    pub fn quality_rules(&self) -> impl Iterator<Item = QualityRule<'_>> {
        self.section("quality")
            .and_then(Value::as_sequence)
            .into_iter()
            .flatten()
            .map(QualityRule::from_value)
    }

    /// Returns `sla.<metric>.threshold` when it is a string.
    pub fn sla_threshold(&self, metric: &str) -> Option<&str> {
        self.section("sla")?
            .get(metric)?
            .get("threshold")?
            .as_str()
    }
}

impl From<Value> for ContractDocument {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

/// Read-only view over one entry of `schema.properties`.
#[derive(Debug, Clone, Copy)]
pub struct Property<'a> {
    attrs: Option<&'a Mapping>,
}

impl<'a> Property<'a> {
    fn from_value(value: Option<&'a Value>) -> Self {
        Self {
            attrs: value.and_then(Value::as_mapping),
        }
    }

    /// Raw attribute lookup.
    pub fn attribute(&self, key: &str) -> Option<&'a Value> {
        self.attrs?.get(key)
    }

    /// Declared type, e.g. `string` or `number`.
    pub fn field_type(&self) -> Option<&'a str> {
        self.attribute("type")?.as_str()
    }

    /// The `pii` flag.
    ///
    /// Besides YAML booleans this accepts the YAML 1.1 spellings
    /// (`yes`/`no`, `on`/`off` in lower, title or upper case) and the numbers
    /// `1` and `0`. Any other value, including the string `"true"`, is not a
    /// flag.
    pub fn pii(&self) -> Option<bool> {
        match self.attribute("pii")? {
            Value::Bool(flag) => Some(*flag),
            Value::String(text) => match text.as_str() {
                "yes" | "Yes" | "YES" | "on" | "On" | "ON" => Some(true),
                "no" | "No" | "NO" | "off" | "Off" | "OFF" => Some(false),
                _ => None,
            },
            Value::Number(number) => match number.as_f64() {
                Some(n) if n == 1.0 => Some(true),
                Some(n) if n == 0.0 => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Lower bound as written in the contract.
    pub fn minimum(&self) -> Option<&'a Value> {
        self.attribute("minimum")
    }

    /// Upper bound as written in the contract.
    pub fn maximum(&self) -> Option<&'a Value> {
        self.attribute("maximum")
    }

    /// Whether an `enum` key is declared, whatever its value.
    pub fn has_enum(&self) -> bool {
        self.attrs.is_some_and(|attrs| attrs.contains_key("enum"))
    }

    /// Regex pattern string, when it is a string.
    pub fn pattern(&self) -> Option<&'a str> {
        self.attribute("pattern")?.as_str()
    }
}

/// Read-only view over one entry of the `quality` sequence.
///
/// Text accessors return `""` for missing or non-string values so that
/// containment checks can be written without unwrapping.
#[derive(Debug, Clone, Copy)]
pub struct QualityRule<'a> {
    entry: Option<&'a Mapping>,
}

impl<'a> QualityRule<'a> {
    fn from_value(value: &'a Value) -> Self {
        Self {
            entry: value.as_mapping(),
        }
    }

    fn text(&self, key: &str) -> &'a str {
        self.entry
            .and_then(|entry| entry.get(key))
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// Rule expression, e.g. `fare_amount >= 0`.
    pub fn expression(&self) -> &'a str {
        self.text("expression")
    }

    pub fn name(&self) -> &'a str {
        self.text("name")
    }

    pub fn column(&self) -> &'a str {
        self.text("column")
    }

    /// Enforcement level, `hard` for blocking rules.
    pub fn enforcement(&self) -> &'a str {
        self.text("enforcement")
    }

    pub fn description(&self) -> &'a str {
        self.text("description")
    }
}
