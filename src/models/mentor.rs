//! Mentor record
//!
//! Mirrors the upstream API's JSON shape: Mongo-style `_id`, camelCase
//! field names. Records are immutable for the lifetime of a session once
//! the list is fetched.

use serde::{Deserialize, Serialize};

/// A mentor directory entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name
    pub name: String,

    /// Country of residence
    pub country: String,

    /// Skill tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Languages the mentor speaks. Absent on profiles created before the
    /// field was introduced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spoken_languages: Option<Vec<String>>,
}

impl Mentor {
    /// Whether the mentor carries the given skill tag (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether the mentor speaks the given language. False when the
    /// profile has no language list at all.
    pub fn speaks(&self, language: &str) -> bool {
        self.spoken_languages
            .as_ref()
            .is_some_and(|langs| langs.iter().any(|l| l == language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{
            "_id": "5f0001",
            "name": "Ada",
            "country": "UK",
            "tags": ["rust", "compilers"],
            "spokenLanguages": ["English"]
        }"#;
        let mentor: Mentor = serde_json::from_str(json).unwrap();
        assert_eq!(mentor.id, "5f0001");
        assert!(mentor.has_tag("rust"));
        assert!(mentor.speaks("English"));
    }

    #[test]
    fn test_missing_optional_fields() {
        let json = r#"{"_id": "m1", "name": "Grace", "country": "US"}"#;
        let mentor: Mentor = serde_json::from_str(json).unwrap();
        assert!(mentor.tags.is_empty());
        assert!(mentor.spoken_languages.is_none());
        assert!(!mentor.speaks("English"));
    }

    #[test]
    fn test_serialize_round_trip_keeps_wire_names() {
        let mentor = Mentor {
            id: "m2".to_string(),
            name: "Linus".to_string(),
            country: "FI".to_string(),
            tags: vec!["kernels".to_string()],
            spoken_languages: None,
        };
        let json = serde_json::to_string(&mentor).unwrap();
        assert!(json.contains("\"_id\""));
        assert!(!json.contains("spokenLanguages"));
    }
}
