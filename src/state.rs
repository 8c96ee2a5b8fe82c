use std::path::PathBuf;

use crate::config::Config;
use crate::data::classify::FilenameBuckets;
use crate::pipeline::{self, PipelineOutput};
use crate::render::Figure;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: Config,

    /// Result of the last successful pipeline run.
    pub output: Option<PipelineOutput>,

    /// Index into `output.figures` shown in the central panel.
    pub selected: usize,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Run the pipeline once for `config`; failures land in `status_message`.
    pub fn new(config: Config) -> Self {
        let mut state = AppState {
            config,
            output: None,
            selected: 0,
            status_message: None,
        };
        state.rerun();
        state
    }

    /// Point the pipeline at another directory and run it again.
    pub fn set_data_dir(&mut self, dir: PathBuf) {
        self.config.data_dir = dir;
        self.rerun();
    }

    pub fn rerun(&mut self) {
        match pipeline::run(&self.config) {
            Ok(output) => {
                self.output = Some(output);
                self.selected = 0;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Pipeline failed: {e:#}");
                self.output = None;
                self.selected = 0;
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    pub fn figures(&self) -> &[Figure] {
        self.output
            .as_ref()
            .map(|o| o.figures.as_slice())
            .unwrap_or(&[])
    }

    pub fn current_figure(&self) -> Option<&Figure> {
        self.figures().get(self.selected)
    }

    pub fn buckets(&self) -> Option<&FilenameBuckets> {
        self.output.as_ref().map(|o| &o.buckets)
    }

    /// Select a figure; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.figures().len() {
            self.selected = index;
        }
    }
}
