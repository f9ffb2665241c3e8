//! Line patterns for the event log.
//!
//! Example lines:
//! 01/01/2020 - Morning MTB Loop [S/E]
//! 02/01/2020 to 04/01/2020 - Snowy Bushwalk [L/R W]
//! - Afternoon swim
//! 05/01/2020 - Mt. Stromlo trip

use crate::Result;
use anyhow::Context;
use regex::Regex;

/// Event title line.
///
/// Capture groups:
/// - `marker`: leading "- ", a second event on the same day as the line above
/// - `date`: start date, day/month/year
/// - `end_date`: end date of a multi-day event, after "to" or "-"
/// - `title`: word characters and spaces
/// - `tags`: trailing "[...]" block, brackets included
pub const TITLE_RE: &str = r#"^(?P<marker>-\s+)?(?P<date>\d{1,2}/\d{1,2}/\d{4})?(?:\s*(?:to|-)\s*(?P<end_date>\d{1,2}/\d{1,2}/\d{4}))?(?:\s+-\s+|\s+)?(?P<title>\w[\w ]*?)\s*(?P<tags>\[[^\]]*\])?$"#;

/// Tag block: "[S/E]", "[M/R W]", "[L/MW]".
///
/// Capture groups:
/// - `distance`: S, M or L
/// - `difficulty`: E, M or R
/// - `wet`: literal W, optional
pub const TAG_RE: &str = r#"^\[(?P<distance>[SML])/(?P<difficulty>[EMR]) ?(?P<wet>W)?\]$"#;

/// Older trip lines: a dated title with free text and no tag block.
///
/// Capture groups:
/// - `date`: start date, day/month/year
/// - `title`: anything without brackets, trailing space excluded
pub const LEGACY_TRIP_TITLE_RE: &str =
    r#"^(?P<date>\d{1,2}/\d{1,2}/\d{4})\s+-\s+(?P<title>[^\[\]]*[^\[\]\s])$"#;

/// Compiled line patterns, built once per run.
#[derive(Debug, Clone)]
pub struct Patterns {
    pub title: Regex,
    pub tag: Regex,
    pub legacy_trip_title: Regex,
}

impl Patterns {
    pub fn compile() -> Result<Self> {
        Ok(Self {
            title: Regex::new(TITLE_RE).context("compile title pattern")?,
            tag: Regex::new(TAG_RE).context("compile tag pattern")?,
            legacy_trip_title: Regex::new(LEGACY_TRIP_TITLE_RE)
                .context("compile legacy trip-title pattern")?,
        })
    }
}
