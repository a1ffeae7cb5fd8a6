use eframe::egui::{self, Color32, RichText, TextEdit, Ui};

use crate::api::types::DownloadKind;
use crate::state::PageState;
use crate::ui::table::data_table;

const PROMPT_HINT: &str = "Describe what you want to do with your data... \
    e.g., 'Clean this dataset and generate 30 new noisy examples'";

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(6.0);
        ui.heading(RichText::new("DataSanity").strong().size(26.0));
        ui.label(RichText::new("Clean, generate, and enrich datasets with AI").weak());
        ui.add_space(6.0);
    });
}

// ---------------------------------------------------------------------------
// Form: prompt, optional CSV, submit
// ---------------------------------------------------------------------------

/// Render the submission form.  Returns `true` when the user asked to submit.
pub fn form_panel(ui: &mut Ui, state: &mut PageState) -> bool {
    let mut submit = false;

    ui.group(|ui: &mut Ui| {
        ui.strong("Data Processing Prompt");
        let mut prompt = state.prompt.clone();
        let edit = TextEdit::multiline(&mut prompt)
            .hint_text(PROMPT_HINT)
            .desired_rows(4)
            .desired_width(f32::INFINITY);
        if ui.add(edit).changed() {
            state.set_prompt(prompt);
        }

        ui.add_space(8.0);
        ui.strong("Upload CSV Dataset (Optional)");
        ui.horizontal(|ui: &mut Ui| {
            if ui.button("Choose file…").clicked() {
                open_file_dialog(state);
            }
            match state.file_name() {
                Some(name) => {
                    ui.label(name);
                    if ui.small_button("✖").on_hover_text("Remove file").clicked() {
                        state.clear_file();
                    }
                }
                None => {
                    ui.label(RichText::new("No file chosen").weak());
                }
            }
        });

        ui.add_space(8.0);
        ui.horizontal(|ui: &mut Ui| {
            let busy = state.is_submitting();
            let label = if busy { "Processing..." } else { "Process Data" };
            let button = egui::Button::new(RichText::new(label).color(Color32::WHITE).strong())
                .fill(Color32::from_rgb(59, 130, 246));
            if ui.add_enabled(!busy, button).clicked() {
                submit = true;
            }
            if busy {
                ui.spinner();
            }
        });
    });

    submit
}

// ---------------------------------------------------------------------------
// Results: four tables + downloads
// ---------------------------------------------------------------------------

/// Render the result section, if any.  Returns the download the user picked.
pub fn results_panel(ui: &mut Ui, state: &PageState) -> Option<DownloadKind> {
    let results = state.results.as_ref()?;
    let mut clicked = None;

    ui.add_space(12.0);
    ui.group(|ui: &mut Ui| {
        ui.heading("Results");
        for (title, table) in results.sections() {
            data_table(ui, title, table);
        }
        ui.add_space(12.0);
        clicked = download_buttons(ui);
    });

    clicked
}

fn download_buttons(ui: &mut Ui) -> Option<DownloadKind> {
    let mut clicked = None;
    ui.horizontal(|ui: &mut Ui| {
        for kind in DownloadKind::ALL {
            let button = egui::Button::new(RichText::new(kind.label()).color(Color32::WHITE).strong())
                .fill(button_fill(kind));
            if ui.add(button).clicked() {
                clicked = Some(kind);
            }
        }
    });
    clicked
}

fn button_fill(kind: DownloadKind) -> Color32 {
    match kind {
        DownloadKind::Csv => Color32::from_rgb(34, 197, 94),
        DownloadKind::Json => Color32::from_rgb(168, 85, 247),
        DownloadKind::Faiss => Color32::from_rgb(239, 68, 68),
    }
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut PageState) {
    let file = rfd::FileDialog::new()
        .set_title("Upload CSV dataset")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        log::info!("Selected upload {}", path.display());
        state.set_file(path);
    }
}

/// Ask where to save a downloaded artifact.
pub fn save_file_dialog(kind: DownloadKind) -> Option<std::path::PathBuf> {
    rfd::FileDialog::new()
        .set_title(kind.label())
        .set_file_name(kind.file_name())
        .add_filter(kind.as_str().to_ascii_uppercase(), &[kind.as_str()])
        .save_file()
}
