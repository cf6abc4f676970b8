// License: MIT

use std::fs;

use indexmap::IndexMap;
use serde_json::json;

use crate::ast::{Document, Value};
use crate::parser;
use crate::CfgError;

/// Export a document to pretty-printed JSON.
///
/// Sections become objects keyed by name, variables become members, lists
/// become arrays. Insertion order is preserved. The document model allows
/// duplicate names, JSON objects do not: a duplicate keeps the position of
/// its first occurrence and the last value wins.
///
/// # Examples
/// ```
/// use plain_cfg::{export, parse};
///
/// let doc = parse("[server]\nport = 8080\n");
/// let json = export::export_document_to_json(&doc).unwrap();
/// assert!(json.contains("\"port\": 8080"));
/// ```
pub fn export_document_to_json(doc: &Document) -> Result<String, CfgError> {
    fn value_to_json(v: &Value) -> serde_json::Value {
        match v {
            Value::Int(n) => json!(n),
            Value::Float(x) => json!(x),
            Value::Str(s) => json!(s),
            Value::Bool(b) => json!(b),
            Value::List(list) => json!(list.iter().map(value_to_json).collect::<Vec<_>>()),
        }
    }

    let mut top: IndexMap<String, IndexMap<String, serde_json::Value>> = IndexMap::new();

    for section in &doc.sections {
        let entry = top.entry(section.name.clone()).or_default();
        for variable in &section.variables {
            entry.insert(variable.name.clone(), value_to_json(&variable.value));
        }
    }

    serde_json::to_string_pretty(&top).map_err(|e| CfgError::TypeError {
        message: format!("Failed to serialize document: {}", e),
        hint: None,
    })
}

/// Read, parse and export a config file to JSON in one call.
///
/// # Errors
/// Returns an error if the file cannot be read; parsing itself never fails.
pub fn export_cfg_file(path: &str) -> Result<String, CfgError> {
    let input = fs::read_to_string(path)
        .map_err(|e| CfgError::file_error(format!("Failed to read file: {}", e), path.to_string()))?;
    export_document_to_json(&parser::parse(&input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_sections_and_values() {
        let doc = parser::parse(
            "[server]\nhost = \"localhost\"\nport = 8080\nready = true\ntags = (1 (2 3))\n",
        );
        let json = export_document_to_json(&doc).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(v["server"]["host"], "localhost");
        assert_eq!(v["server"]["port"], 8080);
        assert_eq!(v["server"]["ready"], true);
        assert_eq!(v["server"]["tags"][1][0], 2);
    }

    #[test]
    fn test_export_merges_duplicate_names_last_wins() {
        let doc = parser::parse("[s]\nx = 1\n[s]\nx = 2\n");
        let json = export_document_to_json(&doc).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(v["s"]["x"], 2);
    }

    #[test]
    fn test_export_keeps_section_order() {
        let doc = parser::parse("[b]\nx = 1\n[a]\ny = 2\n");
        let json = export_document_to_json(&doc).unwrap();

        let b = json.find("\"b\"").unwrap();
        let a = json.find("\"a\"").unwrap();
        assert!(b < a);
    }
}
