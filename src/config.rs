use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::classify::ClassificationRules;

// ---------------------------------------------------------------------------
// Runtime configuration
// ---------------------------------------------------------------------------

/// Where the data lives and how the pipeline treats it.
///
/// Every field is optional in the JSON form:
///
/// ```json
/// {
///   "data_dir": "data",
///   "pattern": "inflammation*.csv",
///   "comparison": ["inflammation-01.csv", "inflammation-02.csv"],
///   "rules": [
///     { "bucket": "large", "prefix": "inflammation" },
///     { "bucket": "small", "prefix": "small" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    /// Glob pattern, relative to `data_dir`, selecting the composite inputs.
    pub pattern: String,
    /// The first file is plotted on its own; the pair is compared by mean.
    pub comparison: (String, String),
    pub rules: ClassificationRules,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("."),
            pattern: "inflammation*.csv".to_string(),
            comparison: (
                "inflammation-01.csv".to_string(),
                "inflammation-02.csv".to_string(),
            ),
            rules: ClassificationRules::default(),
        }
    }
}

impl Config {
    /// Read a JSON config file; missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Build from command-line arguments (program name already stripped).
    ///
    /// `[--config <file.json>] [data_dir]`; a positional directory overrides
    /// the one in the config file.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config_path: Option<PathBuf> = None;
        let mut data_dir: Option<PathBuf> = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let value = args.next().context("--config needs a file argument")?;
                    config_path = Some(PathBuf::from(value));
                }
                flag if flag.starts_with('-') => bail!("unknown option: {flag}"),
                dir => {
                    if data_dir.is_some() {
                        bail!("unexpected extra argument: {dir}");
                    }
                    data_dir = Some(PathBuf::from(dir));
                }
            }
        }

        let mut config = match config_path {
            Some(path) => Config::load(&path)?,
            None => Config::default(),
        };
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }
        Ok(config)
    }

    /// Full paths of the two comparison files.
    pub fn comparison_paths(&self) -> (PathBuf, PathBuf) {
        (
            self.data_dir.join(&self.comparison.0),
            self.data_dir.join(&self.comparison.1),
        )
    }
}
