use ndarray::ArrayView1;

use crate::data::model::{StatisticSeries, Table};
use crate::error::{Result, Shape, StatsError};

pub const Y_LABEL_INFLAMMATION: &str = "Inflammation";
pub const X_LABEL_DAY: &str = "Day";
pub const Y_LABEL_DIFFERENCE: &str = "Average Difference";

// ---------------------------------------------------------------------------
// Figure model – what a window shows, independent of the UI toolkit
// ---------------------------------------------------------------------------

/// How the panels of a figure are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Panels stacked top to bottom.
    Rows,
    /// Panels side by side.
    Columns,
}

/// One line: y values indexed by day.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    fn new(name: impl Into<String>, values: ArrayView1<'_, f64>) -> Self {
        Series {
            name: name.into(),
            values: values.to_vec(),
        }
    }

    /// `[day, value]` points for plotting.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(day, &v)| [day as f64, v])
    }
}

/// A single chart within a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub y_label: String,
    pub x_label: Option<String>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub layout: Layout,
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Length of the longest series, i.e. the extent of the shared day axis.
    pub fn n_days(&self) -> usize {
        self.panels
            .iter()
            .flat_map(|p| p.series.iter())
            .map(|s| s.values.len())
            .max()
            .unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// A single series as an "Inflammation" vs "Day" line chart.
pub fn plot_series(series: &StatisticSeries) -> Figure {
    single_panel(
        "Inflammation",
        Y_LABEL_INFLAMMATION,
        vec![Series::new(Y_LABEL_INFLAMMATION, series.view())],
    )
}

/// Every subject of a table as its own line in one chart.
pub fn plot_patients(table: &Table) -> Figure {
    let series = table
        .rows()
        .enumerate()
        .map(|(i, row)| Series::new(format!("patient {i}"), row))
        .collect();
    single_panel("Patient data", Y_LABEL_INFLAMMATION, series)
}

/// One chart per `(label, series)` pair, all on a shared day axis.
///
/// Every series must have the same length.
pub fn plot_panel(named_series: &[(String, StatisticSeries)], layout: Layout) -> Result<Figure> {
    let Some((_, first)) = named_series.first() else {
        return Err(StatsError::EmptyInput("panel plot with no series"));
    };
    let len = first.len();

    if let Some((_, bad)) = named_series.iter().find(|(_, s)| s.len() != len) {
        return Err(StatsError::ShapeMismatch {
            expected: Shape::Series(len),
            found: Shape::Series(bad.len()),
        });
    }

    let n_panels = named_series.len();
    let panels = named_series
        .iter()
        .enumerate()
        .map(|(i, (label, series))| {
            // Shared axis: only the bottom row (or every column) gets the x label.
            let show_x = layout == Layout::Columns || i + 1 == n_panels;
            Panel {
                y_label: label.clone(),
                x_label: show_x.then(|| X_LABEL_DAY.to_string()),
                series: vec![Series::new(label.as_str(), series.view())],
            }
        })
        .collect();

    Ok(Figure {
        title: "Statistics".to_string(),
        layout,
        panels,
    })
}

/// Difference of two mean series, labelled "Average Difference".
pub fn plot_difference(series: &StatisticSeries) -> Figure {
    single_panel(
        "Average difference",
        Y_LABEL_DIFFERENCE,
        vec![Series::new(Y_LABEL_DIFFERENCE, series.view())],
    )
}

fn single_panel(title: &str, y_label: &str, series: Vec<Series>) -> Figure {
    Figure {
        title: title.to_string(),
        layout: Layout::Rows,
        panels: vec![Panel {
            y_label: y_label.to_string(),
            x_label: Some(X_LABEL_DAY.to_string()),
            series,
        }],
    }
}
