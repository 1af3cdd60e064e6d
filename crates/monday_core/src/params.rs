//! Parameter serialization for GraphQL argument lists.
//!
//! [`format_parameters`] turns an [`Arguments`] set into `name: value`
//! fragments. Values are JSON-encoded unless their name is in the literal set,
//! in which case they are emitted raw (enum members such as `active` or
//! `created_at`). Literal values are not escaped; callers only mark
//! parameters as literal when their values are valid GraphQL tokens.

use rustc_hash::FxHashSet;
use serde_json::Value;

use crate::arguments::Arguments;

/// Internal bindings that never reach the wire.
pub const RESERVED_KEYS: &[&str] = &["self", "all_fields"];

/// Literal and exclusion rules for one serialization.
#[derive(Debug, Clone, Default)]
pub struct ParameterOptions {
    literals: FxHashSet<String>,
    exclude: FxHashSet<String>,
}

impl ParameterOptions {
    /// Creates options with no literals and no exclusions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a parameter as literal.
    #[must_use]
    pub fn literal(mut self, name: impl Into<String>) -> Self {
        self.literals.insert(name.into());
        self
    }

    /// Marks several parameters as literal.
    #[must_use]
    pub fn literals<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.literals.extend(names.into_iter().map(Into::into));
        self
    }

    /// Excludes a parameter from the output.
    #[must_use]
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.exclude.insert(name.into());
        self
    }

    /// Excludes several parameters from the output.
    #[must_use]
    pub fn excludes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(names.into_iter().map(Into::into));
        self
    }

    /// Returns true if `name` is rendered raw.
    #[must_use]
    pub fn is_literal(&self, name: &str) -> bool {
        self.literals.contains(name)
    }

    /// Returns true if `name` is dropped, either explicitly or as a reserved key.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        RESERVED_KEYS.contains(&name) || self.exclude.contains(name)
    }
}

/// Serializes an argument set into `name: value` fragments.
///
/// Excluded and reserved keys are removed first, then absent values; the
/// survivors keep their insertion order. Exclusion wins over the literal set.
#[must_use]
pub fn format_parameters(arguments: &Arguments, options: &ParameterOptions) -> Vec<String> {
    arguments
        .iter()
        .filter(|(key, _)| !options.is_excluded(key))
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| format_argument(key, value, options.is_literal(key)))
        .collect()
}

/// Renders a single fragment.
#[must_use]
pub fn format_argument(key: &str, value: &Value, literal: bool) -> String {
    if literal {
        match value {
            Value::String(raw) => format!("{key}: {raw}"),
            other => format!("{key}: {other}"),
        }
    } else {
        // `Display` for `Value` is compact JSON with string escaping.
        format!("{key}: {value}")
    }
}

/// Wraps fragments in an argument list, or renders nothing when empty.
#[must_use]
pub fn argument_list(fragments: &[String]) -> String {
    if fragments.is_empty() {
        String::new()
    } else {
        format!("({})", fragments.join(", "))
    }
}

/// Wraps fragments in a GraphQL input object literal.
#[must_use]
pub fn input_object(fragments: &[String]) -> String {
    format!("{{{}}}", fragments.join(", "))
}

/// Converts a value into a JSON string for `JSON` scalar arguments.
///
/// The API expects JSON arguments as a string holding JSON text, so objects
/// and arrays are stringified. Strings are assumed to hold JSON text already.
#[must_use]
pub fn json_string(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::String(text) => Value::String(text.clone()),
        other => Value::String(other.to_string()),
    }
}
