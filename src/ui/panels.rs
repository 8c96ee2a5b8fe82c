use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – figure list and file classification
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Figures");
    ui.separator();

    if state.figures().is_empty() {
        ui.label("Nothing to show.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let mut clicked = None;
            for (i, fig) in state.figures().iter().enumerate() {
                if ui.selectable_label(state.selected == i, &fig.title).clicked() {
                    clicked = Some(i);
                }
            }
            if let Some(i) = clicked {
                state.select(i);
            }

            ui.add_space(8.0);
            ui.heading("Files");
            ui.separator();

            let Some(buckets) = state.buckets() else {
                return;
            };
            for (name, files) in buckets.iter() {
                let header_text = format!("{name}  ({})", files.len());
                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(name)
                    .default_open(!files.is_empty())
                    .show(ui, |ui: &mut Ui| {
                        for file in files {
                            ui.label(file);
                        }
                    });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.rerun();
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(state.config.data_dir.display().to_string());

        let n = state.figures().len();
        if n > 0 {
            ui.separator();
            ui.label(format!("figure {} of {n}", state.selected + 1));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open inflammation data folder")
        .set_directory(&state.config.data_dir)
        .pick_folder();

    if let Some(dir) = folder {
        log::info!("Switching data folder to {}", dir.display());
        state.set_data_dir(dir);
    }
}
