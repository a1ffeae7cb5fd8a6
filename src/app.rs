use eframe::egui;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::api::types::DownloadKind;
use crate::config::ClientConfig;
use crate::state::PageState;
use crate::ui::panels;
use crate::worker::{self, PendingSubmit};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DataSanityApp {
    pub state: PageState,
    client: ApiClient,
    pending: Option<PendingSubmit>,
}

impl DataSanityApp {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self {
            state: PageState::default(),
            client: ApiClient::new(config)?,
            pending: None,
        })
    }

    /// Settle the in-flight submission once its worker reports.
    fn poll_pending(&mut self) {
        let Some(outcome) = self.pending.as_ref().and_then(PendingSubmit::poll) else {
            return;
        };
        self.pending = None;
        self.state.finish_submit(outcome);
    }

    fn submit(&mut self, ctx: &egui::Context) {
        if let Some(request) = self.state.begin_submit() {
            self.pending = Some(PendingSubmit::spawn(self.client.clone(), request, ctx.clone()));
        }
    }

    fn download(&self, kind: DownloadKind) {
        log::info!("Download {} requested", kind.as_str());
        match panels::save_file_dialog(kind) {
            Some(dest) => worker::spawn_download(self.client.clone(), kind, dest),
            None => log::debug!("Download {} cancelled", kind.as_str()),
        }
    }
}

impl eframe::App for DataSanityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pending();

        // ---- Top panel: title ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui);
        });

        // ---- Central panel: form + results ----
        let mut submit = false;
        let mut download = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    submit = panels::form_panel(ui, &mut self.state);
                    download = panels::results_panel(ui, &self.state);
                });
        });

        if submit {
            self.submit(ctx);
        }
        if let Some(kind) = download {
            self.download(kind);
        }
    }
}
