use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Column '{0}' not found")]
    ColumnNotFound(String),
    #[error("Failed to parse row #{row}, column '{column}' ('{value}'): {source}")]
    Parse {
        row: usize,
        column: String,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("Row #{row}, column '{column}' is not finite: '{value}'")]
    NonFinite {
        row: usize,
        column: String,
        value: String,
    },
    #[error("Row #{row} has no cell in column #{column}")]
    MissingCell { row: usize, column: usize },
    #[error("Column '{0}' contains no data")]
    EmptyColumn(String),
}
