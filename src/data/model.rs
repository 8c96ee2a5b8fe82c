use std::fmt;

use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::error::{Result, Shape, StatsError};

// ---------------------------------------------------------------------------
// Table – one loaded data file
// ---------------------------------------------------------------------------

/// A 2-D block of measurements: rows are subjects, columns are days.
///
/// Every row has the same length. Values are not range-checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    data: Array2<f64>,
}

/// One reduced row: a value per column (day).
pub type StatisticSeries = Array1<f64>;

impl Table {
    /// Wrap an existing array.
    pub fn from_array(data: Array2<f64>) -> Self {
        Table { data }
    }

    /// Build a table from parsed rows. All rows must have the length of the first.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        let mut flat = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            if row.len() != n_cols {
                return Err(StatsError::ShapeMismatch {
                    expected: Shape::Series(n_cols),
                    found: Shape::Series(row.len()),
                });
            }
            flat.extend(row);
        }

        let data = Array2::from_shape_vec((n_rows, n_cols), flat).map_err(|_| {
            StatsError::ShapeMismatch {
                expected: Shape::Table(n_rows, n_cols),
                found: Shape::Series(n_rows * n_cols),
            }
        })?;
        Ok(Table { data })
    }

    /// Number of subjects.
    pub fn n_rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of time points.
    pub fn n_cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn shape(&self) -> Shape {
        Shape::Table(self.n_rows(), self.n_cols())
    }

    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    pub fn array(&self) -> &Array2<f64> {
        &self.data
    }

    /// Iterate over subject rows.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> {
        self.data.axis_iter(Axis(0))
    }
}

// ---------------------------------------------------------------------------
// Column statistics
// ---------------------------------------------------------------------------

/// The three reductions produced for every table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    Average,
    Max,
    Min,
}

impl Statistic {
    pub const ALL: [Statistic; 3] = [Statistic::Average, Statistic::Max, Statistic::Min];

    pub fn label(self) -> &'static str {
        match self {
            Statistic::Average => "Average",
            Statistic::Max => "Max",
            Statistic::Min => "Min",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-column mean, maximum and minimum of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStatistics {
    pub mean: StatisticSeries,
    pub max: StatisticSeries,
    pub min: StatisticSeries,
}

impl ColumnStatistics {
    pub fn get(&self, stat: Statistic) -> &StatisticSeries {
        match stat {
            Statistic::Average => &self.mean,
            Statistic::Max => &self.max,
            Statistic::Min => &self.min,
        }
    }

    /// `(label, series)` pairs in Average, Max, Min order, ready for a panel plot.
    pub fn labelled(&self) -> Vec<(String, StatisticSeries)> {
        Statistic::ALL
            .iter()
            .map(|&s| (s.label().to_string(), self.get(s).clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_builds_row_major_table() {
        let t = Table::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(t.n_rows(), 2);
        assert_eq!(t.n_cols(), 3);
        assert_eq!(t.array()[[1, 0]], 4.0);
        assert_eq!(t.rows().count(), 2);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Table::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]]).unwrap_err();
        assert!(matches!(err, StatsError::ShapeMismatch { .. }));
    }

    #[test]
    fn from_rows_empty_is_zero_by_zero() {
        let t = Table::from_rows(Vec::new()).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.shape(), Shape::Table(0, 0));
    }

    #[test]
    fn labelled_statistics_keep_order() {
        let stats = ColumnStatistics {
            mean: Array1::from(vec![2.0]),
            max: Array1::from(vec![3.0]),
            min: Array1::from(vec![1.0]),
        };
        let labels: Vec<String> = stats.labelled().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, ["Average", "Max", "Min"]);
    }
}
