//! Link table data model.
//!
//! The table is produced by an external design-tool export and read once per
//! run. Record names are not guaranteed to be unique.

use serde::{Deserialize, Deserializer, Serialize};

/// One `(name, url)` entry of the link table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub name: String,
    pub url: String,
}

impl ComponentRecord {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Top-level shape of the link table file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTable {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub components: Vec<ComponentRecord>,
}

/// `"components": null` reads as an empty table.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ComponentRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ComponentRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

impl LinkTable {
    pub fn new(components: Vec<ComponentRecord>) -> Self {
        Self { components }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table_ignores_extra_fields() {
        let json = r#"{
            "fileKey": "abc",
            "components": [
                { "name": "Button", "url": "https://figma.example/1", "nodeId": "1:2" },
                { "name": "Card", "url": "https://figma.example/2" }
            ]
        }"#;
        let table = LinkTable::from_json(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.components[0], ComponentRecord::new("Button", "https://figma.example/1"));
    }

    #[test]
    fn test_missing_components_is_empty() {
        let table = LinkTable::from_json("{}").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_null_components_is_empty() {
        let table = LinkTable::from_json(r#"{"components": null}"#).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_record_requires_url() {
        assert!(LinkTable::from_json(r#"{"components":[{"name":"Button"}]}"#).is_err());
    }
}
