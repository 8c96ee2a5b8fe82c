use ndarray::{Array2, Axis};

use super::model::{ColumnStatistics, StatisticSeries, Table};
use crate::error::{Result, Shape, StatsError};

/// Mean, maximum and minimum of every column, taken across all rows.
pub fn column_statistics(table: &Table) -> Result<ColumnStatistics> {
    if table.is_empty() {
        return Err(StatsError::EmptyInput("column statistics over zero rows"));
    }
    let data = table.array();

    Ok(ColumnStatistics {
        mean: column_mean(data)?,
        max: data.fold_axis(Axis(0), f64::NEG_INFINITY, |&acc, &x| nan_or(acc, x, f64::max)),
        min: data.fold_axis(Axis(0), f64::INFINITY, |&acc, &x| nan_or(acc, x, f64::min)),
    })
}

/// Any NaN poisons the whole column, as it does for the mean.
fn nan_or(acc: f64, x: f64, pick: fn(f64, f64) -> f64) -> f64 {
    if acc.is_nan() || x.is_nan() {
        f64::NAN
    } else {
        pick(acc, x)
    }
}

/// Per-column `mean(a) - mean(b)`. Row counts may differ, column counts may not.
pub fn difference_of_means(a: &Table, b: &Table) -> Result<StatisticSeries> {
    if a.n_cols() != b.n_cols() {
        return Err(StatsError::ShapeMismatch {
            expected: Shape::Columns(a.n_cols()),
            found: Shape::Columns(b.n_cols()),
        });
    }
    if a.is_empty() || b.is_empty() {
        return Err(StatsError::EmptyInput("difference of means over zero rows"));
    }
    Ok(column_mean(a.array())? - column_mean(b.array())?)
}

/// Element-wise mean of several tables of identical shape.
///
/// The first table fixes the expected shape.
pub fn combine_average(tables: &[Table]) -> Result<Table> {
    let (first, rest) = tables
        .split_first()
        .ok_or(StatsError::EmptyInput("composite average over zero tables"))?;

    let mut sum: Array2<f64> = first.array().clone();
    for table in rest {
        if table.array().dim() != first.array().dim() {
            return Err(StatsError::ShapeMismatch {
                expected: first.shape(),
                found: table.shape(),
            });
        }
        sum += table.array();
    }
    sum /= tables.len() as f64;

    log::debug!("Combined {} tables of shape {}", tables.len(), first.shape());
    Ok(Table::from_array(sum))
}

fn column_mean(data: &Array2<f64>) -> Result<StatisticSeries> {
    data.mean_axis(Axis(0))
        .ok_or(StatsError::EmptyInput("mean over zero rows"))
}
