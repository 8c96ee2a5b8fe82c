use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Shape – dimensions reported in mismatch errors
// ---------------------------------------------------------------------------

/// Dimensions of a table or series, used to describe shape mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A 2-D table: rows × columns.
    Table(usize, usize),
    /// A 1-D series of the given length.
    Series(usize),
    /// Column count only; row counts are allowed to differ.
    Columns(usize),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Table(r, c) => write!(f, "{r}×{c}"),
            Shape::Series(n) => write!(f, "len {n}"),
            Shape::Columns(c) => write!(f, "{c} columns"),
        }
    }
}

// ---------------------------------------------------------------------------
// StatsError – everything the loader, reducer and renderer can fail with
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum StatsError {
    /// A field was not numeric or a row had the wrong number of fields.
    #[error("{}:{line}: {reason}", .path.display())]
    Parse {
        path: PathBuf,
        /// 1-based line number in the source file.
        line: u64,
        reason: String,
    },

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch { expected: Shape, found: Shape },

    /// A reduction was requested over nothing.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
}

pub type Result<T> = std::result::Result<T, StatsError>;
