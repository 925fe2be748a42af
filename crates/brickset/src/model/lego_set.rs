//! LegoSet - One entry of the Brickset dataset
//!
//! Records are constructed once at load time and read-only thereafter.

use serde::{Deserialize, Deserializer, Serialize};

use super::packaging_type::PackagingType;

/// A LEGO set record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegoSet {
    /// Set number, e.g. "10305-1"
    number: String,
    name: String,
    theme: String,
    pieces: u32,
    packaging_type: PackagingType,
    /// Missing or `null` in the dataset means no tags
    #[serde(default, deserialize_with = "null_as_empty")]
    tags: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl LegoSet {
    /// Create a new LegoSet without tags
    pub fn new(
        number: impl Into<String>,
        name: impl Into<String>,
        theme: impl Into<String>,
        pieces: u32,
        packaging_type: PackagingType,
    ) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            theme: theme.into(),
            pieces,
            packaging_type,
            tags: Vec::new(),
        }
    }

    /// Builder: set tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(|t| t.into()).collect();
        self
    }

    // ========== Getters ==========

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn packaging_type(&self) -> PackagingType {
        self.packaging_type
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl core::fmt::Display for LegoSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} {} ({}, {} pieces)",
            self.number, self.name, self.theme, self.pieces
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_dataset_record() {
        let json = r#"{
            "number": "10305-1",
            "name": "Lion Knights' Castle",
            "theme": "Icons",
            "subtheme": "Castle",
            "year": 2022,
            "pieces": 4514,
            "packagingType": "BOX",
            "tags": ["castle", "knights"]
        }"#;

        let set: LegoSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.number(), "10305-1");
        assert_eq!(set.theme(), "Icons");
        assert_eq!(set.pieces(), 4514);
        assert_eq!(set.packaging_type(), PackagingType::Box);
        assert_eq!(set.tags(), ["castle", "knights"]);
    }

    #[test]
    fn test_missing_or_null_tags_are_empty() {
        let missing = r#"{"number": "1", "name": "A", "theme": "T", "pieces": 1, "packagingType": "BAG"}"#;
        let null = r#"{"number": "2", "name": "B", "theme": "T", "pieces": 1, "packagingType": "BAG", "tags": null}"#;

        let missing: LegoSet = serde_json::from_str(missing).unwrap();
        let null: LegoSet = serde_json::from_str(null).unwrap();
        assert!(missing.tags().is_empty());
        assert!(null.tags().is_empty());
    }

    #[test]
    fn test_negative_pieces_rejected() {
        let json = r#"{"number": "1", "name": "A", "theme": "T", "pieces": -5, "packagingType": "BOX"}"#;
        assert!(serde_json::from_str::<LegoSet>(json).is_err());
    }

    #[test]
    fn test_builder() {
        let set = LegoSet::new("6080-1", "King's Castle", "Castle", 674, PackagingType::Box)
            .with_tags(["knights", "castle"]);

        assert_eq!(set.tags(), ["knights", "castle"]);
        assert_eq!(set.to_string(), "6080-1 King's Castle (Castle, 674 pieces)");
    }
}
