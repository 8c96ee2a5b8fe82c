use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};

use super::model::Table;
use crate::error::{Result, StatsError};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// How a data file is split into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions { delimiter: b',' }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a comma-delimited numeric file with no header row.
pub fn load_table(path: &Path) -> Result<Table> {
    load_table_with(path, &LoadOptions::default())
}

/// Load several files, stopping at the first failure.
pub fn load_tables<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Table>> {
    paths.iter().map(|p| load_table(p.as_ref())).collect()
}

/// Load a delimited numeric file.
///
/// Layout: one subject per line, one numeric field per day, no header.
/// Blank lines are skipped and whitespace around fields is ignored. The first
/// row fixes the column count; any later row of a different length, or any
/// field that does not parse as `f64`, fails with [`StatsError::Parse`].
pub fn load_table_with(path: &Path, options: &LoadOptions) -> Result<Table> {
    let file = File::open(path).map_err(|source| StatsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(options.delimiter)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut width: Option<usize> = None;

    for result in reader.records() {
        let record = result.map_err(|e| StatsError::Parse {
            path: path.to_path_buf(),
            line: e.position().map_or(0, |p| p.line()),
            reason: e.to_string(),
        })?;
        let line = record.position().map_or(0, |p| p.line());

        // Whitespace-only line; a row of empty fields still goes to the parser.
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        let row = parse_row(record.iter(), path, line)?;

        match width {
            None => width = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(StatsError::Parse {
                    path: path.to_path_buf(),
                    line,
                    reason: format!("expected {expected} fields but found {}", row.len()),
                });
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    let table = Table::from_rows(rows)?;
    log::info!(
        "Loaded {} ({} subjects × {} days)",
        path.display(),
        table.n_rows(),
        table.n_cols()
    );
    Ok(table)
}

fn parse_row<'a>(
    fields: impl Iterator<Item = &'a str>,
    path: &Path,
    line: u64,
) -> Result<Vec<f64>> {
    fields
        .enumerate()
        .map(|(j, tok)| {
            tok.parse::<f64>().map_err(|_| StatsError::Parse {
                path: PathBuf::from(path),
                line,
                reason: format!("field {} '{tok}' is not a number", j + 1),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use tempfile::NamedTempFile;

    fn fixture(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_two_by_three() {
        let f = fixture("1,2,3\n4,5,6\n");
        let t = load_table(f.path()).unwrap();
        assert_eq!((t.n_rows(), t.n_cols()), (2, 3));
        assert_eq!(t.array().row(0).to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(t.array().row(1).to_vec(), vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn tolerates_spaces_blank_lines_and_floats() {
        let f = fixture("0, 1.5 ,2\n\n3,4e0, 5.25\n");
        let t = load_table(f.path()).unwrap();
        assert_eq!(t.n_rows(), 2);
        assert_eq!(t.array()[[0, 1]], 1.5);
        assert_eq!(t.array()[[1, 2]], 5.25);
    }

    #[test]
    fn ragged_rows_are_a_parse_error() {
        let f = fixture("1,2,3\n4,5\n");
        match load_table(f.path()) {
            Err(StatsError::Parse { line, reason, .. }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("expected 3 fields"), "{reason}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn row_of_empty_fields_is_a_parse_error() {
        let f = fixture("1,2,3\n,,\n4,5,6\n");
        match load_table(f.path()) {
            Err(StatsError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn whitespace_only_line_is_skipped() {
        let f = fixture("1,2\n   \n3,4\n");
        let t = load_table(f.path()).unwrap();
        assert_eq!(t.n_rows(), 2);
    }

    #[test]
    fn non_numeric_field_names_the_file() {
        let f = fixture("1,2,3\n4,five,6\n");
        let err = load_table(f.path()).unwrap_err();
        assert!(matches!(err, StatsError::Parse { .. }));
        let msg = err.to_string();
        assert!(msg.contains(&f.path().display().to_string()), "{msg}");
        assert!(msg.contains("'five'"), "{msg}");
    }

    #[test]
    fn custom_delimiter() {
        let f = fixture("1;2\n3;4\n");
        let opts = LoadOptions { delimiter: b';' };
        let t = load_table_with(f.path(), &opts).unwrap();
        assert_eq!(t.array()[[1, 1]], 4.0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_table(Path::new("/nonexistent/inflammation-99.csv")).unwrap_err();
        assert!(matches!(err, StatsError::Io { .. }));
    }

    #[test]
    fn load_tables_stops_at_first_failure() {
        let good = fixture("1,2\n");
        let bad = fixture("1,x\n");
        assert_eq!(load_tables(&[good.path()]).unwrap().len(), 1);
        assert!(load_tables(&[good.path(), bad.path()]).is_err());
    }
}
