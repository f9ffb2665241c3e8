//! Record-level errors.
//!
//! These never abort a run under the default policy; the pipeline collects
//! them next to the accepted records and the console summary lists them.

use thiserror::Error;

/// A non-empty date field that is not a day/month/4-digit-year calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected a DD/MM/YYYY date, got {0:?}")]
pub struct DateParseError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("line {line}: cannot parse event line: {text:?}")]
    Tokenize { line: usize, text: String },

    #[error("line {line}: bad {field}: {source}")]
    Date {
        line: usize,
        field: &'static str,
        #[source]
        source: DateParseError,
    },

    /// The first accepted line has no date to fill down from.
    #[error("line {line}: no start date and no earlier event to inherit one from")]
    MissingStartDate { line: usize },
}

impl RecordError {
    pub fn line(&self) -> usize {
        match self {
            RecordError::Tokenize { line, .. }
            | RecordError::Date { line, .. }
            | RecordError::MissingStartDate { line } => *line,
        }
    }
}
