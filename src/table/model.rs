use std::fmt;

use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// CellValue – a single cell in a result table
// ---------------------------------------------------------------------------

/// A dynamically-typed display value.  CSV cells are always `String`; JSON
/// records keep their scalar type so numbers stay numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Nested array or object, kept as compact JSON text.
    Json(String),
    Null,
}

impl CellValue {
    pub fn from_json(val: &JsonValue) -> Self {
        match val {
            JsonValue::String(s) => CellValue::String(s.clone()),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    CellValue::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    CellValue::Float(f)
                } else {
                    CellValue::String(n.to_string())
                }
            }
            JsonValue::Bool(b) => CellValue::Bool(*b),
            JsonValue::Null => CellValue::Null,
            other => CellValue::Json(other.to_string()),
        }
    }
}

/// Values are shown as-is: no rounding, no type-specific formatting.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) | CellValue::Json(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Table – normalized headers / rows
// ---------------------------------------------------------------------------

/// Uniform tabular shape produced by the normalizer.
///
/// Rows are expected to be as wide as `headers`, but this is not enforced:
/// the normalizer passes through whatever the payload contained and the grid
/// pads on display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Degenerate one-cell table carrying an error message.
    pub fn error(message: impl Into<String>) -> Self {
        Table {
            headers: vec!["Error".to_string()],
            rows: vec![vec![CellValue::String(message.into())]],
        }
    }

    /// Widest of the header row and every data row.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    /// Whether any row's length differs from the header count.
    pub fn is_ragged(&self) -> bool {
        self.rows.iter().any(|row| row.len() != self.headers.len())
    }
}
