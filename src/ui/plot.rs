use eframe::egui::{self, Ui, Vec2b};
use egui_plot::{Line, Plot, PlotPoints};

use crate::color::panel_colors;
use crate::render::{Figure, Layout, Panel};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Figure plot (central panel)
// ---------------------------------------------------------------------------

/// Render the selected figure in the central panel.
pub fn figure_plot(ui: &mut Ui, state: &AppState) {
    let figure = match state.current_figure() {
        Some(fig) => fig,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("No figures  (File → Open data folder…)");
            });
            return;
        }
    };

    ui.heading(&figure.title);
    ui.separator();

    let link_group = egui::Id::new(("figure", state.selected));
    let n_panels = figure.panels.len();

    match figure.layout {
        Layout::Rows => {
            let spacing = ui.spacing().item_spacing.y;
            let height = (ui.available_height() - spacing * n_panels as f32) / n_panels as f32;
            for (i, panel) in figure.panels.iter().enumerate() {
                panel_plot(ui, figure, i, panel, link_group, height);
            }
        }
        Layout::Columns => {
            let height = ui.available_height();
            ui.columns(n_panels, |columns: &mut [Ui]| {
                for (i, (col, panel)) in columns.iter_mut().zip(&figure.panels).enumerate() {
                    panel_plot(col, figure, i, panel, link_group, height);
                }
            });
        }
    }
}

fn panel_plot(
    ui: &mut Ui,
    figure: &Figure,
    index: usize,
    panel: &Panel,
    link_group: egui::Id,
    height: f32,
) {
    let colors = panel_colors(panel, index, figure.panels.len());

    let mut plot = Plot::new(("panel", &figure.title, index))
        .height(height.max(80.0))
        .y_axis_label(panel.y_label.as_str())
        .link_axis(link_group, Vec2b::new(true, false))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if let Some(x_label) = &panel.x_label {
        plot = plot.x_axis_label(x_label.as_str());
    }

    plot.show(ui, |plot_ui| {
        for (series, &color) in panel.series.iter().zip(colors.iter()) {
            let points: PlotPoints = series.points().collect();
            let line = Line::new(points)
                .name(&series.name)
                .color(color)
                .width(1.5);
            plot_ui.line(line);
        }
    });
}
