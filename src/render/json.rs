//! JSON rendering for résumé documents.

use crate::error::{Error, Result};
use crate::model::ResumeDocument;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &ResumeDocument, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Read a document back from JSON.
pub fn from_json(json: &str) -> Result<ResumeDocument> {
    serde_json::from_str(json).map_err(|e| Error::Render(format!("JSON parse error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entry, Section};

    fn sample() -> ResumeDocument {
        let mut doc = ResumeDocument::new();
        doc.personal_info.name = "Jane Doe".to_string();
        let mut entry = Entry::new("Acme Corp");
        entry.add_point("Shipped v2");
        doc.sections.push(Section::with_entries("EXPERIENCE", vec![entry]));
        doc
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"personal_info\""));
        assert!(json.contains("Jane Doe"));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
    }

    #[test]
    fn test_wire_shape() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entry = &value["sections"][0]["entries"][0];
        assert_eq!(value["sections"][0]["title"], "EXPERIENCE");
        assert_eq!(entry["company"], "Acme Corp");
        assert_eq!(entry["duration"], "");
        assert_eq!(entry["points"][0], "Shipped v2");
    }

    #[test]
    fn test_from_json() {
        let doc = sample();
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert_eq!(from_json(&json).unwrap(), doc);
        assert!(matches!(from_json("{"), Err(Error::Render(_))));
    }
}
