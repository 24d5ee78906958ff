// File: crates/playground-chart/src/error.rs
// Summary: Error type shared by ingestion, configuration and click dispatch.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// A record lacks a required field.
    #[error("record {index}: missing field `{field}`")]
    MissingField { index: usize, field: String },

    /// The value field holds something that is not a finite number.
    #[error("record {index}: field `{field}` is not a finite number: {raw}")]
    NotNumeric { index: usize, field: String, raw: String },

    /// The date field could not be parsed as an ISO-8601 date or date-time.
    #[error("record {index}: unparseable date `{raw}`")]
    InvalidDate { index: usize, raw: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    /// The host spawner refused the click trigger future.
    #[error("failed to dispatch click trigger: {0}")]
    Dispatch(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
