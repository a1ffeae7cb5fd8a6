use serde_json::Value as JsonValue;

use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// RawInput – what the processing endpoint hands us for one table
// ---------------------------------------------------------------------------

/// A table payload, classified by the caller before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    CsvText(String),
    JsonText(String),
    ObjectValue(JsonValue),
}

impl RawInput {
    /// Text starting with `{` or `[` is JSON, anything else is CSV.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.starts_with('{') || text.starts_with('[') {
            RawInput::JsonText(text)
        } else {
            RawInput::CsvText(text)
        }
    }

    /// Classify one field of the processing response.
    ///
    /// Returns `None` for payloads the page never renders: `null`, `""`,
    /// `false` and `0`.
    pub fn from_payload(value: JsonValue) -> Option<Self> {
        match value {
            JsonValue::Null | JsonValue::Bool(false) => None,
            JsonValue::String(text) if text.is_empty() => None,
            JsonValue::Number(ref n) if n.as_f64() == Some(0.0) => None,
            JsonValue::String(text) => Some(Self::from_text(text)),
            other => Some(RawInput::ObjectValue(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Convert one payload into a [`Table`].  Dispatch by variant.
pub fn normalize(input: &RawInput) -> Table {
    match input {
        RawInput::CsvText(text) => parse_csv(text),
        RawInput::JsonText(text) => parse_json(text),
        RawInput::ObjectValue(value) => table_from_json(value),
    }
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// Plain comma split, first line is the header.  No quoting or escaping.
fn parse_csv(text: &str) -> Table {
    let mut lines = text.trim().split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l));

    let headers = lines
        .next()
        .unwrap_or("")
        .split(',')
        .map(str::to_string)
        .collect();

    let rows = lines
        .map(|line| line.split(',').map(CellValue::from).collect())
        .collect();

    Table { headers, rows }
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

fn parse_json(text: &str) -> Table {
    match serde_json::from_str::<JsonValue>(text) {
        Ok(value) => table_from_json(&value),
        Err(e) => {
            log::warn!("Table payload is not valid JSON: {e}");
            Table::error(format!("Failed to parse JSON: {e}"))
        }
    }
}

/// Expected shape (records under a `data` key):
///
/// ```json
/// { "data": [ { "name": "a", "age": 3 }, { "name": "b", "age": 5 } ] }
/// ```
///
/// Headers come from the first record.  Every record contributes its own
/// values in its own key order.  Any other shape yields an empty table.
fn table_from_json(value: &JsonValue) -> Table {
    let Some(records) = value.get("data").and_then(JsonValue::as_array) else {
        return Table::empty();
    };

    let headers = records
        .first()
        .and_then(JsonValue::as_object)
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default();

    let rows = records
        .iter()
        .map(|rec| match rec.as_object() {
            Some(obj) => obj.values().map(CellValue::from_json).collect(),
            None => Vec::new(),
        })
        .collect();

    Table { headers, rows }
}
