use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form design tokens attached to a theme
///
/// Arbitrary JSON values keyed by token name. Backed by a BTreeMap so the
/// persisted JSON is byte-stable across writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct DesignTokens {
    data: BTreeMap<String, serde_json::Value>,
}

impl DesignTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.data.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.data.remove(key)
    }

    /// Token names in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.data.keys()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<BTreeMap<String, serde_json::Value>> for DesignTokens {
    fn from(data: BTreeMap<String, serde_json::Value>) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_get_remove() {
        let mut tokens = DesignTokens::new();
        tokens.set("shadow", json!("0 1px 2px rgba(0,0,0,.1)"));
        tokens.set("radius_lg", json!("16px"));

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens.get("radius_lg"), Some(&json!("16px")));
        assert!(tokens.remove("shadow").is_some());
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_serializes_as_sorted_object() {
        let mut tokens = DesignTokens::new();
        tokens.set("z", json!(1));
        tokens.set("a", json!({"nested": true}));

        let json = serde_json::to_string(&tokens).unwrap();
        assert_eq!(json, r#"{"a":{"nested":true},"z":1}"#);
    }
}
