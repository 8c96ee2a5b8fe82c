use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::render::Panel;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n).map(|i| hue_color(i as f32 / n as f32 * 360.0)).collect()
}

fn hue_color(hue: f32) -> Color32 {
    let hsl = Hsl::new(hue, 0.75, 0.55);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// One colour per series in a panel.
///
/// A lone series takes the hue assigned to its panel index so that the
/// Average / Max / Min charts of a figure are told apart.
pub fn panel_colors(panel: &Panel, panel_index: usize, n_panels: usize) -> Vec<Color32> {
    match panel.series.len() {
        1 => {
            let hue = panel_index as f32 / n_panels.max(1) as f32 * 360.0;
            vec![hue_color(hue)]
        }
        n => generate_palette(n),
    }
}
