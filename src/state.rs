use std::path::PathBuf;

use crate::api::error::ApiError;
use crate::api::types::{ResultBundle, SubmitRequest};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Displaying,
}

/// The full page state, independent of rendering.
#[derive(Debug)]
pub struct PageState {
    /// Free-text processing prompt.
    pub prompt: String,

    /// CSV file chosen for upload, read only when a submission starts.
    pub file: Option<PathBuf>,

    /// Tables from the last successful response.
    pub results: Option<ResultBundle>,

    pub phase: Phase,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            file: None,
            results: None,
            phase: Phase::Idle,
        }
    }
}

impl PageState {
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn set_file(&mut self, path: PathBuf) {
        self.file = Some(path);
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    /// Display name of the selected file, if any.
    pub fn file_name(&self) -> Option<String> {
        self.file
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Start a submission and snapshot the form.
    ///
    /// Returns `None` while a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if self.is_submitting() {
            log::debug!("Submit ignored: request already in flight");
            return None;
        }
        self.phase = Phase::Submitting;
        Some(SubmitRequest {
            prompt: self.prompt.clone(),
            file: self.file.clone(),
        })
    }

    /// Settle the in-flight submission.  A new bundle replaces the old one
    /// wholesale; a failure is logged and leaves the previous results.
    pub fn finish_submit(&mut self, outcome: Result<ResultBundle, ApiError>) {
        match outcome {
            Ok(bundle) => {
                let shown = bundle.sections().iter().filter(|(_, t)| t.is_some()).count();
                log::info!("Received {shown} result table(s)");
                self.results = Some(bundle);
            }
            Err(e) => {
                log::error!("Error processing request: {e:#}");
            }
        }
        self.phase = Phase::Displaying;
    }
}
