use eframe::egui;

use inflammation_viewer::app::InflammationApp;
use inflammation_viewer::config::Config;
use inflammation_viewer::state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("usage: inflammation-viewer [--config <file.json>] [data_dir]");
            std::process::exit(2);
        }
    };

    let state = AppState::new(config);
    if let Some(buckets) = state.buckets() {
        print!("{buckets}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Inflammation Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(InflammationApp::new(state)))),
    )
}
