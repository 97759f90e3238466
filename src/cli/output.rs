//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{OutputFormat, SlangdexArgs};
use crate::dictionary::entry::DictionaryEntry;
use crate::dictionary::relationship::TableDiagnostic;
use crate::error::Result;
use crate::lexicon::LexiconStats;
use crate::matcher::fuzzy::{MatchTier, MatchedEntry};

/// Result structure for term expansion.
#[derive(Debug, Serialize)]
pub struct ExpansionResult {
    pub term: String,
    pub keys: Vec<String>,
}

/// Result structure for find and suggest.
#[derive(Debug, Serialize)]
pub struct MatchResults {
    pub query: String,
    pub matches: Vec<MatchedEntry>,
}

/// Result structure for an entry lookup.
#[derive(Debug, Serialize)]
pub struct DefinitionResult {
    pub entry: DictionaryEntry,
    pub related: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

/// Result structure for data validation.
#[derive(Debug, Serialize)]
pub struct ValidationResult {
    pub records: usize,
    pub diagnostics: Vec<TableDiagnostic>,
}

/// Human-readable rendering of a result.
pub trait HumanOutput: Serialize {
    /// Print the result for a person reading a terminal.
    fn print_human(&self) -> Result<()> {
        let value = serde_json::to_value(self)?;
        output_generic_human(&value);
        Ok(())
    }

    /// Rows for CSV output, when the result is a list.
    fn csv_rows(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl HumanOutput for ExpansionResult {
    fn print_human(&self) -> Result<()> {
        if self.keys.is_empty() {
            println!("No entries found for '{}'", self.term);
        } else {
            println!("'{}' expands to {} entries:", self.term, self.keys.len());
            for key in &self.keys {
                println!("  {key}");
            }
        }
        Ok(())
    }

    fn csv_rows(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(
            self.keys
                .iter()
                .map(|key| serde_json::json!({ "key": key }))
                .collect::<Vec<_>>(),
        )?)
    }
}

impl HumanOutput for MatchResults {
    fn print_human(&self) -> Result<()> {
        if self.matches.is_empty() {
            println!("No matches for '{}'", self.query);
            return Ok(());
        }

        println!("Matches for '{}':", self.query);
        println!("═══════════════");
        for (i, entry) in self.matches.iter().enumerate() {
            let tier = match entry.tier {
                MatchTier::Prefix => "prefix".to_string(),
                MatchTier::Fuzzy => format!("fuzzy {:.3}", entry.score),
                MatchTier::Related => "related".to_string(),
            };
            let part_of_speech = if entry.part_of_speech.is_empty() {
                String::new()
            } else {
                format!(" ({})", entry.part_of_speech)
            };
            println!("{:>3}. {}{} [{}]", i + 1, entry.key, part_of_speech, tier);
            if !entry.text.is_empty() {
                println!("     {}", entry.text);
            }
        }
        Ok(())
    }

    fn csv_rows(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.matches)?)
    }
}

impl HumanOutput for DefinitionResult {
    fn print_human(&self) -> Result<()> {
        let entry = &self.entry;
        println!("{}", entry.key);
        if !entry.pronunciation.is_empty() {
            println!("  /{}/", entry.pronunciation);
        }
        if !entry.part_of_speech.is_empty() {
            println!("  {}", entry.part_of_speech);
        }
        println!("  {}", entry.definition);
        if !entry.example.is_empty() {
            println!("  Example: {}", entry.example);
        }
        if !entry.etymology.is_empty() {
            println!("  Etymology: {}", entry.etymology);
        }
        if !self.related.is_empty() {
            println!("  Related: {}", self.related.join(", "));
        }
        if let Some(prompt) = &self.prompt {
            println!();
            println!("{prompt}");
        }
        Ok(())
    }
}

impl HumanOutput for ValidationResult {
    fn print_human(&self) -> Result<()> {
        if self.diagnostics.is_empty() {
            println!("{} relationship records, no issues found", self.records);
        } else {
            println!(
                "{} relationship records, {} issues:",
                self.records,
                self.diagnostics.len()
            );
            for diagnostic in &self.diagnostics {
                println!("  - {diagnostic}");
            }
        }
        Ok(())
    }

    fn csv_rows(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(
            self.diagnostics
                .iter()
                .map(|d| serde_json::json!({ "issue": d.to_string() }))
                .collect::<Vec<_>>(),
        )?)
    }
}

impl HumanOutput for LexiconStats {}

/// Output a result in the specified format.
pub fn output_result<T: HumanOutput>(message: &str, result: &T, args: &SlangdexArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human()
        }
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Csv => output_csv(&result.csv_rows()?),
    }
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                println!("{}: {}", key, format_value(val));
            }
        }
        _ => println!("{}", format_value(value)),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SlangdexArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Output in CSV format.
fn output_csv(value: &serde_json::Value) -> Result<()> {
    for line in csv_lines(value) {
        println!("{line}");
    }
    Ok(())
}

/// Render a JSON value as CSV lines: arrays of objects become a header plus
/// rows, a single object becomes key/value pairs.
fn csv_lines(value: &serde_json::Value) -> Vec<String> {
    let mut lines = Vec::new();
    match value {
        serde_json::Value::Array(arr) => {
            if let Some(first) = arr.first().and_then(|item| item.as_object()) {
                lines.push(first.keys().cloned().collect::<Vec<_>>().join(","));
            }
            for item in arr {
                if let Some(obj) = item.as_object() {
                    let values: Vec<String> = obj.values().map(format_csv_value).collect();
                    lines.push(values.join(","));
                }
            }
        }
        serde_json::Value::Object(obj) => {
            lines.push("key,value".to_string());
            for (key, value) in obj {
                lines.push(format!("{},{}", key, format_csv_value(value)));
            }
        }
        _ => {
            lines.push("value".to_string());
            lines.push(format_csv_value(value));
        }
    }
    lines
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

/// Format a JSON value for CSV output.
fn format_csv_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => {
            if s.contains(',') || s.contains('"') || s.contains('\n') {
                let escaped = s.replace('"', "\"\"");
                format!("\"{escaped}\"")
            } else {
                s.clone()
            }
        }
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join("; ");
            format!("\"[{formatted_values}]\"")
        }
        serde_json::Value::Object(_) => "\"[object]\"".to_string(),
        serde_json::Value::Null => "".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_csv_lines_for_rows() {
        let value = json!([
            {"key": "rizz", "text": "Charm, style"},
            {"key": "aura", "text": "Vibe"}
        ]);
        let lines = csv_lines(&value);

        assert_eq!(lines[0], "key,text");
        assert_eq!(lines[1], "rizz,\"Charm, style\"");
        assert_eq!(lines[2], "aura,Vibe");
    }

    #[test]
    fn test_csv_lines_for_object() {
        let lines = csv_lines(&json!({"entries": 3}));
        assert_eq!(lines, vec!["key,value", "entries,3"]);
    }

    #[test]
    fn test_expansion_rows() {
        let result = ExpansionResult {
            term: "bobo".to_string(),
            keys: vec!["8080".to_string(), "Sped".to_string()],
        };
        let lines = csv_lines(&result.csv_rows().unwrap());
        assert_eq!(lines, vec!["key", "8080", "Sped"]);
    }

    #[test]
    fn test_format_csv_value_escaping() {
        assert_eq!(format_csv_value(&json!("say \"hi\"")), "\"say \"\"hi\"\"\"");
        assert_eq!(format_csv_value(&json!(null)), "");
    }
}
