use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the meal aggregator.
#[derive(Error, Debug)]
pub enum MealError {
    /// The expected food-log input file does not exist.
    #[error("Input file not found: {0}")]
    MissingInput(PathBuf),

    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The aggregated output could not be written.
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A timestamp cell did not match any recognised format.
    #[error("Invalid timestamp on line {line}, column {column}: {value:?}")]
    TimestampParse {
        line: u64,
        column: String,
        value: String,
    },

    /// A numeric cell (amount or nutrient) could not be parsed.
    #[error("Invalid number on line {line}, column {column}: {value:?}")]
    FieldParse {
        line: u64,
        column: String,
        value: String,
    },

    /// A record or header lacks a column the layout requires.
    #[error("Missing column {column} on line {line}")]
    MissingColumn { line: u64, column: String },

    /// The CSV document itself is malformed.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A participant identifier is not a non-negative integer.
    #[error("Invalid participant id: {0}")]
    InvalidParticipant(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the meal crates.
pub type Result<T> = std::result::Result<T, MealError>;
