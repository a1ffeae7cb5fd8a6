use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::table::grid::{DisplayGrid, RowShade};
use crate::table::model::Table;

// ---------------------------------------------------------------------------
// Result table (one per bundle section)
// ---------------------------------------------------------------------------

/// Render a titled table.  Returns `false` and draws nothing when the
/// section is absent.
pub fn data_table(ui: &mut Ui, title: &str, table: Option<&Table>) -> bool {
    let Some(table) = table else {
        return false;
    };
    let grid = DisplayGrid::from_table(table);

    ui.add_space(8.0);
    ui.label(RichText::new(title).strong().size(16.0));

    if grid.width() == 0 {
        ui.label(RichText::new("No columns").weak());
        return true;
    }

    let even_fill = ui.visuals().faint_bg_color;

    ui.push_id(title, |ui: &mut Ui| {
        egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(false)
                .vscroll(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .columns(Column::auto().at_least(60.0).resizable(true), grid.width())
                .header(24.0, |mut header| {
                    for label in &grid.headers {
                        header.col(|ui: &mut Ui| {
                            ui.strong(label);
                        });
                    }
                })
                .body(|body| {
                    body.rows(22.0, grid.rows.len(), |mut row| {
                        let display = &grid.rows[row.index()];
                        let fill = shade_fill(display.shade, even_fill);
                        for cell in &display.cells {
                            row.col(|ui: &mut Ui| {
                                if fill != Color32::TRANSPARENT {
                                    ui.painter().rect_filled(ui.max_rect(), 0.0, fill);
                                }
                                ui.label(cell);
                            });
                        }
                    });
                });
        });
    });

    true
}

fn shade_fill(shade: RowShade, even_fill: Color32) -> Color32 {
    match shade {
        RowShade::Even => even_fill,
        RowShade::Odd => Color32::TRANSPARENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::normalize::{RawInput, normalize};

    fn render(table: Option<&Table>) -> bool {
        let ctx = egui::Context::default();
        let mut drawn = false;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                drawn = data_table(ui, "Cleaned Data", table);
            });
        });
        drawn
    }

    #[test]
    fn absent_table_draws_nothing() {
        assert!(!render(None));
    }

    #[test]
    fn present_tables_are_drawn() {
        let csv = normalize(&RawInput::from_text("a,b\n1,2\n3,4"));
        assert!(render(Some(&csv)));
        assert!(render(Some(&Table::empty())));
        assert!(render(Some(&Table::error("Failed to parse JSON: EOF"))));
    }

    #[test]
    fn odd_rows_are_unfilled() {
        assert_eq!(shade_fill(RowShade::Odd, Color32::GRAY), Color32::TRANSPARENT);
        assert_eq!(shade_fill(RowShade::Even, Color32::GRAY), Color32::GRAY);
    }
}
