//! Decoded upstream payloads.
//!
//! Records are kept as an untyped JSON tree. Nothing here assumes a schema:
//! every accessor returns `None` (or an empty list) when a field is absent or
//! has an unexpected type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ability names pulled out of an entity record, in upstream order.
pub type AbilityList = Vec<String>;

/// A pokemon record exactly as the upstream returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityRecord(Value);

impl EntityRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Field of the top-level object, if the record is an object and has it.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The `name` field as a string.
    pub fn name(&self) -> Option<&str> {
        self.field("name").and_then(Value::as_str)
    }

    /// The `id` field as an integer.
    pub fn id(&self) -> Option<u64> {
        self.field("id").and_then(Value::as_u64)
    }

    /// Ability names from `abilities[i].ability.name`.
    pub fn abilities(&self) -> AbilityList {
        extract_abilities(&self.0)
    }
}

impl From<Value> for EntityRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Walk `abilities[i].ability.name`, skipping elements of the wrong shape.
///
/// Never fails: a record without an `abilities` array yields an empty list.
pub fn extract_abilities(record: &Value) -> AbilityList {
    let Some(entries) = record.get("abilities").and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| entry.get("ability")?.get("name")?.as_str())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_abilities() {
        let record = json!({
            "name": "pikachu",
            "abilities": [
                {"ability": {"name": "static"}},
                {"ability": {"name": "lightning-rod"}}
            ]
        });
        assert_eq!(extract_abilities(&record), vec!["static", "lightning-rod"]);
    }

    #[test]
    fn test_extract_abilities_missing_field() {
        assert!(extract_abilities(&json!({"name": "ditto"})).is_empty());
        assert!(extract_abilities(&json!("not an object")).is_empty());
        assert!(extract_abilities(&json!({"abilities": {"ability": "x"}})).is_empty());
    }

    #[test]
    fn test_extract_abilities_skips_malformed_entries() {
        let record = json!({
            "abilities": [
                {"ability": {"name": "overgrow"}},
                {"ability": null},
                {"ability": {"name": 42}},
                "chlorophyll",
                {"slot": 3},
                {"ability": {"name": "chlorophyll", "url": "https://pokeapi.co/api/v2/ability/34/"}}
            ]
        });
        assert_eq!(extract_abilities(&record), vec!["overgrow", "chlorophyll"]);
    }

    #[test]
    fn test_record_accessors() {
        let record = EntityRecord::new(json!({"id": 25, "name": "pikachu"}));
        assert_eq!(record.name(), Some("pikachu"));
        assert_eq!(record.id(), Some(25));
        assert!(record.field("sprites").is_none());

        let scalar = EntityRecord::new(json!(7));
        assert!(scalar.name().is_none());
        assert!(scalar.abilities().is_empty());
    }

    #[test]
    fn test_record_serializes_transparently() {
        let raw = json!({"name": "eevee", "abilities": []});
        let record = EntityRecord::new(raw.clone());
        assert_eq!(serde_json::to_value(&record).unwrap(), raw);
    }
}
