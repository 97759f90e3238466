//! Loading dictionary and relationship data from JSON files.
//!
//! Both files hold a JSON array of records:
//!
//! ```json
//! [{"key": "rizz", "definition": "Charisma", "partOfSpeech": "noun"}]
//! [{"word": "rizz", "alternatives": ["riz"], "related": ["rizzler"]}]
//! ```

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::dictionary::entry::{Dictionary, DictionaryEntry};
use crate::dictionary::relationship::{RelationshipRecord, RelationshipTable};
use crate::error::{Result, SlangdexError};

/// Load dictionary entries from a JSON file.
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dictionary = entries_from_json(&content)?;
    info!(
        "Loaded {} dictionary entries from {}",
        dictionary.len(),
        path.display()
    );
    Ok(dictionary)
}

/// Parse dictionary entries from a JSON string.
pub fn entries_from_json(content: &str) -> Result<Dictionary> {
    let entries: Vec<DictionaryEntry> = serde_json::from_str(content)?;
    Ok(Dictionary::from_entries(entries))
}

/// Load relationship records from a JSON file.
///
/// Data inconsistencies are logged as warnings, never rejected.
pub fn load_relationships<P: AsRef<Path>>(path: P) -> Result<RelationshipTable> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let table = relationships_from_json(&content)?;
    info!(
        "Loaded {} relationship records from {}",
        table.len(),
        path.display()
    );
    log_diagnostics(&table);
    Ok(table)
}

/// Parse relationship records from a JSON string.
pub fn relationships_from_json(content: &str) -> Result<RelationshipTable> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if !value.is_array() {
        return Err(SlangdexError::data(
            "relationship data must be a JSON array of records",
        ));
    }
    let records: Vec<RelationshipRecord> = serde_json::from_value(value)?;
    Ok(RelationshipTable::from_records(records))
}

/// Emit one warning per data inconsistency.
pub fn log_diagnostics(table: &RelationshipTable) {
    for diagnostic in table.diagnostics() {
        warn!("{diagnostic}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_entries_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"key":"rizz","definition":"Charisma","partOfSpeech":"noun"}},
                {{"key":"aura","definition":"Vibe"}}]"#
        )
        .unwrap();
        file.flush().unwrap();

        let dictionary = load_entries(file.path()).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.get("rizz").unwrap().part_of_speech, "noun");
    }

    #[test]
    fn test_load_relationships_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"word":"8080","alternatives":["bobo","tanga"],"related":["Sped"]}},
                {{"word":"Sped","alternatives":["slow"]}}]"#
        )
        .unwrap();
        file.flush().unwrap();

        let table = load_relationships(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("8080").unwrap().alternatives, vec!["bobo", "tanga"]);
        assert!(table.get("Sped").unwrap().related.is_empty());
    }

    #[test]
    fn test_rejects_non_array() {
        let result = relationships_from_json(r#"{"word":"rizz"}"#);
        assert!(matches!(result, Err(SlangdexError::Data(_))));

        let result = entries_from_json("not json");
        assert!(matches!(result, Err(SlangdexError::Json(_))));
    }
}
