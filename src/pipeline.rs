use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::Config;
use crate::data::classify::{classify, FilenameBuckets};
use crate::data::loader::{load_table, load_tables};
use crate::data::stats::{column_statistics, combine_average, difference_of_means};
use crate::render::{plot_difference, plot_panel, plot_patients, Figure, Layout};

/// Everything one run produces: figures in display order plus the file buckets.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub figures: Vec<Figure>,
    pub buckets: FilenameBuckets,
}

/// Files in `dir` matching the glob `pattern`, sorted by path.
pub fn discover_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let full = Path::new(&escaped).join(pattern);
    let full = full.to_string_lossy();

    let mut files = glob::glob(&full)
        .with_context(|| format!("invalid file pattern {full}"))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("listing {full}"))?;
    files.sort();

    log::debug!("{} file(s) match {full}", files.len());
    Ok(files)
}

/// Load → reduce → plot over the configured data directory.
///
/// Steps, in order: the first comparison file's patients, its aggregate
/// statistics, the mean difference between the comparison pair, the
/// composite of every discovered file, and the classification of those files.
pub fn run(config: &Config) -> Result<PipelineOutput> {
    let mut figures = Vec::new();
    let (first_path, second_path) = config.comparison_paths();
    let first_name = &config.comparison.0;
    let second_name = &config.comparison.1;

    // ---- Individual patient data ----
    let first = load_table(&first_path).context("loading patient data")?;
    figures.push(plot_patients(&first).with_title(format!("Patient data: {first_name}")));

    // ---- Aggregate statistics ----
    let stats = column_statistics(&first)
        .with_context(|| format!("computing statistics for {first_name}"))?;
    figures.push(
        plot_panel(&stats.labelled(), Layout::Rows)?
            .with_title(format!("Aggregate statistics: {first_name}")),
    );

    // ---- Difference between two datasets ----
    let second = load_table(&second_path).context("loading comparison data")?;
    let diff = difference_of_means(&first, &second)
        .with_context(|| format!("comparing {first_name} with {second_name}"))?;
    figures.push(plot_difference(&diff).with_title(format!("{first_name} vs {second_name}")));

    // ---- Composite of all matching files ----
    let files = discover_files(&config.data_dir, &config.pattern)?;
    if files.is_empty() {
        log::warn!(
            "No files match {} in {}",
            config.pattern,
            config.data_dir.display()
        );
    }
    let tables = load_tables(&files).context("loading composite inputs")?;
    let composite = combine_average(&tables)
        .with_context(|| format!("combining {} file(s) matching {}", files.len(), config.pattern))?;
    let composite_stats = column_statistics(&composite).context("computing composite statistics")?;
    figures.push(
        plot_panel(&composite_stats.labelled(), Layout::Columns)?
            .with_title(format!("Composite of {} file(s)", files.len())),
    );

    // ---- Classification ----
    let names: Vec<String> = files
        .iter()
        .map(|p| {
            p.file_name()
                .map_or_else(|| p.display().to_string(), |n| n.to_string_lossy().into_owned())
        })
        .collect();
    let buckets = classify(&names, &config.rules);
    for (bucket, entries) in buckets.iter() {
        log::info!("{bucket}: {} file(s)", entries.len());
    }

    log::info!("Built {} figures", figures.len());
    Ok(PipelineOutput { figures, buckets })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn discovery_is_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["inflammation-02.csv", "inflammation-01.csv", "small-01.csv"] {
            fs::write(dir.path().join(name), "1,2\n").unwrap();
        }
        let found = discover_files(dir.path(), "inflammation*.csv").unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["inflammation-01.csv", "inflammation-02.csv"]);
    }

    #[test]
    fn discovery_of_nothing_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_files(dir.path(), "*.csv").unwrap().is_empty());
    }

    #[test]
    fn missing_comparison_file_fails_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        let err = run(&config).unwrap_err();
        assert!(format!("{err:#}").contains("loading patient data"));
    }
}
