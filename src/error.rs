use thiserror::Error;

/// Errors surfaced by the analysis pipeline.
///
/// Row-level data problems are not represented here: a row that fails
/// validation is skipped by the caller and never becomes an error.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{source_name}: missing required column(s): {}", .missing.join(", "))]
    Schema {
        source_name: String,
        missing: Vec<String>,
    },
    #[error(
        "invalid room type {0:?}, expected one of \"Entire home/apt\", \"Private room\", \"Shared room\""
    )]
    InvalidRoomType(String),
    #[error("{filename}: no YYYY-MM-DD date before the file extension")]
    SnapshotDate { filename: String },
    #[error("room {room_id}: first observed price is zero, percentage change is undefined")]
    DivisionByZero { room_id: i64 },
    #[error("room {room_id}: price change from {first} to {last} is not a finite percentage")]
    NonFiniteChange { room_id: i64, first: f64, last: f64 },
    #[error("statistics error: {0}")]
    Statistics(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
