use std::path::Path;
use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;

use super::error::ApiError;
use super::types::{DownloadKind, ProcessResponse, ResultBundle, SubmitRequest};
use crate::config::ClientConfig;

// ---------------------------------------------------------------------------
// Blocking API client
// ---------------------------------------------------------------------------

/// Talks to the processing backend.  Blocking by design: every call is made
/// from a worker thread, never from the UI thread.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client with no request timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(None::<Duration>).build()?;
        Ok(Self::from_parts(config.api_base_url.clone(), http))
    }

    pub(crate) fn from_parts(base_url: String, http: Client) -> Self {
        Self { http, base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// `POST /api/process` with the prompt and optional CSV upload.
    ///
    /// The body is decoded whatever the status code; a non-2xx response
    /// is only logged.
    pub fn process(&self, request: &SubmitRequest) -> Result<ResultBundle, ApiError> {
        let mut form = Form::new().text("prompt", request.prompt.clone());
        if let Some(path) = &request.file {
            form = form.part("file", csv_part(path)?);
        }

        let url = self.endpoint("api/process");
        log::info!(
            "POST {url} (prompt: {} chars, file: {:?})",
            request.prompt.len(),
            request.file
        );

        let response = self.http.post(&url).multipart(form).send()?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("{url} answered {status}");
        }

        let text = response.text()?;
        let body: ProcessResponse = serde_json::from_str(&text)?;
        Ok(ResultBundle::from(body))
    }

    /// `GET /api/download/{type}`; returns the raw artifact bytes.
    pub fn download(&self, kind: DownloadKind) -> Result<Vec<u8>, ApiError> {
        let url = self.endpoint(&format!("api/download/{}", kind.as_str()));
        log::info!("GET {url}");

        let response = self.http.get(&url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}

fn csv_part(path: &Path) -> Result<Part, ApiError> {
    let bytes = std::fs::read(path).map_err(|source| ApiError::ReadUpload {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload.csv".to_string());

    Ok(Part::bytes(bytes).file_name(name).mime_str("text/csv")?)
}
