// ---------------------------------------------------------------------------
// StatsError: failures while loading the historical datasets
// ---------------------------------------------------------------------------

use std::fmt;
use std::path::PathBuf;

/// Errors raised while reading and decoding a dataset table.
///
/// Every variant names the table it came from so a bad data directory can
/// be fixed from the log line alone.
#[derive(Debug)]
pub enum StatsError {
    /// The file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not a JSON array of rows.
    Json {
        table: String,
        source: serde_json::Error,
    },
    /// The table has no header row.
    EmptyTable(String),
    /// A column the decoder needs is absent from the header.
    MissingColumn { table: String, column: String },
    /// A cell holds the wrong kind of value.
    BadValue {
        table: String,
        row: usize,
        column: String,
        expected: &'static str,
    },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            StatsError::Json { table, source } => write!(f, "{table}: invalid JSON: {source}"),
            StatsError::EmptyTable(table) => write!(f, "{table}: missing header row"),
            StatsError::MissingColumn { table, column } => {
                write!(f, "{table}: missing column '{column}'")
            }
            StatsError::BadValue {
                table,
                row,
                column,
                expected,
            } => write!(f, "{table}: row {row}, column '{column}': expected {expected}"),
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatsError::Io { source, .. } => Some(source),
            StatsError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_missing_column_names_table_and_column() {
        let err = StatsError::MissingColumn {
            table: "incidents.json".to_string(),
            column: "Min Delay".to_string(),
        };
        assert_eq!(err.to_string(), "incidents.json: missing column 'Min Delay'");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = StatsError::Io {
            path: PathBuf::from("assets/data/incidents.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().starts_with("cannot read assets/data/incidents.json"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_bad_value_display() {
        let err = StatsError::BadValue {
            table: "delay_likelihood.json".to_string(),
            row: 3,
            column: "Hour".to_string(),
            expected: "an hour between 0 and 23",
        };
        assert_eq!(
            err.to_string(),
            "delay_likelihood.json: row 3, column 'Hour': expected an hour between 0 and 23"
        );
    }
}
