use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::{Context, Result};
use eframe::egui;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::api::types::{DownloadKind, ResultBundle, SubmitRequest};

// ---------------------------------------------------------------------------
// Submission worker
// ---------------------------------------------------------------------------

/// One in-flight `POST /api/process`, polled by the UI each frame.
pub struct PendingSubmit {
    rx: Receiver<Result<ResultBundle, ApiError>>,
}

impl PendingSubmit {
    /// Run the request on a background thread; the UI is repainted when it lands.
    pub fn spawn(client: ApiClient, request: SubmitRequest, ctx: egui::Context) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let outcome = client.process(&request);
            // Receiver gone means the app is shutting down.
            let _ = tx.send(outcome);
            ctx.request_repaint();
        });
        Self { rx }
    }

    /// `None` while the request is still running.
    pub fn poll(&self) -> Option<Result<ResultBundle, ApiError>> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(ApiError::WorkerGone)),
        }
    }
}

// ---------------------------------------------------------------------------
// Download worker
// ---------------------------------------------------------------------------

/// Fetch an artifact and write it to `dest` in the background.  Fire and
/// forget: the outcome only reaches the log.
pub fn spawn_download(client: ApiClient, kind: DownloadKind, dest: PathBuf) {
    thread::spawn(move || match fetch_to_file(&client, kind, &dest) {
        Ok(written) => log::info!(
            "Saved {} ({written} bytes) to {}",
            kind.file_name(),
            dest.display()
        ),
        Err(e) => log::error!("Download {} failed: {e:#}", kind.as_str()),
    });
}

pub fn fetch_to_file(client: &ApiClient, kind: DownloadKind, dest: &Path) -> Result<usize> {
    let bytes = client
        .download(kind)
        .with_context(|| format!("fetching {} artifact", kind.as_str()))?;
    std::fs::write(dest, &bytes).with_context(|| format!("writing {}", dest.display()))?;
    Ok(bytes.len())
}
