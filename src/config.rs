//! Run configuration, built from the command line.
//!
//! `--json-out` falls back to the `TRAIL_LOG_JSON_OUT` environment variable
//! (handled by clap). When neither is given nothing is exported.

use clap::ValueEnum;
use std::path::PathBuf;

pub const JSON_OUT_ENV: &str = "TRAIL_LOG_JSON_OUT";

/// What to do with a line that cannot be turned into a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum UnparsedPolicy {
    /// List it in the error report and keep going.
    #[default]
    Report,
    /// Stop the run with an error.
    Abort,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub json_out: Option<PathBuf>,
    pub on_unparsed: UnparsedPolicy,
}

impl ReportConfig {
    pub fn new(input: PathBuf, json_out: Option<PathBuf>, on_unparsed: UnparsedPolicy) -> Self {
        // An empty variable means "unset".
        let json_out = json_out.filter(|p| !p.as_os_str().is_empty());
        Self {
            input,
            json_out,
            on_unparsed,
        }
    }
}
