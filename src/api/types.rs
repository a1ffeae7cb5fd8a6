use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::table::model::Table;
use crate::table::normalize::{RawInput, normalize};

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Snapshot of the form taken when a submission starts.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub prompt: String,
    pub file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// Wire shape of `POST /api/process`.  Every key is optional and unknown keys
/// (e.g. a validation `detail`) are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResponse {
    pub cleaned_data: Option<JsonValue>,
    pub generated_data: Option<JsonValue>,
    pub vectorized_data: Option<JsonValue>,
    pub enriched_data: Option<JsonValue>,
}

/// The four normalized result tables of one submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultBundle {
    pub cleaned: Option<Table>,
    pub generated: Option<Table>,
    pub vectorized: Option<Table>,
    pub enriched: Option<Table>,
}

impl ResultBundle {
    /// Titled tables in page order.  Absent tables are yielded as `None`.
    pub fn sections(&self) -> [(&'static str, Option<&Table>); 4] {
        [
            ("Cleaned Data", self.cleaned.as_ref()),
            ("Generated Data", self.generated.as_ref()),
            ("Vectorized Data", self.vectorized.as_ref()),
            ("Enriched Data", self.enriched.as_ref()),
        ]
    }
}

fn table_for(payload: Option<JsonValue>) -> Option<Table> {
    payload
        .and_then(RawInput::from_payload)
        .map(|input| normalize(&input))
}

impl From<ProcessResponse> for ResultBundle {
    fn from(resp: ProcessResponse) -> Self {
        ResultBundle {
            cleaned: table_for(resp.cleaned_data),
            generated: table_for(resp.generated_data),
            vectorized: table_for(resp.vectorized_data),
            enriched: table_for(resp.enriched_data),
        }
    }
}

// ---------------------------------------------------------------------------
// Downloads
// ---------------------------------------------------------------------------

/// Artifact types served under `/api/download/{type}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadKind {
    Csv,
    Json,
    /// Placeholder: the backend has no real index to serve.
    Faiss,
}

impl DownloadKind {
    pub const ALL: [DownloadKind; 3] = [DownloadKind::Csv, DownloadKind::Json, DownloadKind::Faiss];

    /// Path segment and file extension.
    pub fn as_str(self) -> &'static str {
        match self {
            DownloadKind::Csv => "csv",
            DownloadKind::Json => "json",
            DownloadKind::Faiss => "faiss",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DownloadKind::Csv => "Download CSV",
            DownloadKind::Json => "Download JSON",
            DownloadKind::Faiss => "Download FAISS Index",
        }
    }

    pub fn file_name(self) -> String {
        format!("processed_data.{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::model::CellValue;

    #[test]
    fn bundle_from_mixed_payloads() {
        let resp: ProcessResponse = serde_json::from_str(
            r#"{
                "cleanedData": "a,b\n1,2",
                "generatedData": {"data": [{"x": 1}]},
                "vectorizedData": null,
                "detail": "ignored"
            }"#,
        )
        .unwrap();
        let bundle = ResultBundle::from(resp);

        let cleaned = bundle.cleaned.as_ref().unwrap();
        assert_eq!(cleaned.headers, vec!["a", "b"]);
        let generated = bundle.generated.as_ref().unwrap();
        assert_eq!(generated.rows, vec![vec![CellValue::Integer(1)]]);
        assert!(bundle.vectorized.is_none());
        assert!(bundle.enriched.is_none());
    }

    #[test]
    fn sections_keep_page_order() {
        let bundle = ResultBundle {
            enriched: Some(Table::empty()),
            ..Default::default()
        };
        let titles: Vec<&str> = bundle.sections().iter().map(|(t, _)| *t).collect();
        assert_eq!(
            titles,
            vec!["Cleaned Data", "Generated Data", "Vectorized Data", "Enriched Data"]
        );
        assert!(bundle.sections()[3].1.is_some());
        assert!(bundle.sections()[0].1.is_none());
    }

    #[test]
    fn download_names() {
        assert_eq!(DownloadKind::Csv.file_name(), "processed_data.csv");
        assert_eq!(DownloadKind::Faiss.as_str(), "faiss");
        assert_eq!(DownloadKind::Json.label(), "Download JSON");
    }
}
