//! Ordered key/value properties attached to concepts and relations.
//!
//! Producers emit property values with arbitrary JSON types; everything
//! downstream works with plain strings. [`deserialize`] is the coercion
//! boundary: strings pass through unchanged, arrays join their coerced
//! elements with `", "`, and every other value keeps its JSON text.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Ordered string-to-string property map.
///
/// Insertion order is preserved, so properties render in the order the
/// producer emitted them.
pub type Properties = IndexMap<String, String>;

/// Deserializes a property map, coercing non-string values to strings.
///
/// Meant for `#[serde(deserialize_with = "properties::deserialize")]` on the
/// `properties` fields of [`Concept`](crate::Concept) and
/// [`Relation`](crate::Relation).
pub fn deserialize<'de, D>(deserializer: D) -> Result<Properties, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(key, value)| (key, coerce(&value)))
        .collect())
}

/// Converts a single JSON value into its property-string form.
pub fn coerce(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(coerce)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
