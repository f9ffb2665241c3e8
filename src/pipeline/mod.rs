//! Ordered pass from source lines to enriched records.
//!
//! Per line: tokenize, decompose tags, classify, parse dates, fill down the
//! start date, check order against the previous accepted record. Lines that
//! fail any of these steps are reported and left out of the record list.

pub mod fill;
pub mod order;

use crate::Result;
use crate::config::UnparsedPolicy;
use crate::error::RecordError;
use crate::event::{EventRecord, Patterns, classify, decompose_tags, parse_date, tokenize_line};
use crate::input::SourceLine;
use anyhow::bail;
use fill::FillDown;
use order::{OrderCheck, Span};
use tracing::{debug, info, trace, warn};

/// Accepted records in file order plus the lines that were rejected.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    pub records: Vec<EventRecord>,
    pub errors: Vec<RecordError>,
}

pub fn run(patterns: &Patterns, lines: &[SourceLine], policy: UnparsedPolicy) -> Result<Outcome> {
    let mut out = Outcome::default();
    let mut fill = FillDown::new();
    let mut order = OrderCheck::new();

    for src in lines {
        match enrich(patterns, src, &mut fill, &mut order) {
            Ok(record) => {
                debug!(line = record.line, date = %record.date, title = %record.title, "event");
                out.records.push(record);
            }
            Err(err) => {
                if policy == UnparsedPolicy::Abort {
                    bail!("{}", err);
                }
                warn!(line = err.line(), "{}", err);
                // The rejected line may have started a new day; a following
                // "- " line must not inherit the day before it.
                fill.reset();
                out.errors.push(err);
            }
        }
    }

    info!(
        records = out.records.len(),
        rejected = out.errors.len(),
        "parsed event log"
    );
    Ok(out)
}

/// One line through every stage. The accumulators are only advanced once
/// the line is known to be accepted.
fn enrich(
    patterns: &Patterns,
    src: &SourceLine,
    fill: &mut FillDown,
    order: &mut OrderCheck,
) -> std::result::Result<EventRecord, RecordError> {
    let line = src.number;
    let raw = tokenize_line(patterns, line, &src.text)?;
    trace!(line, canonical = %raw.to_line(), "tokenized");
    let tags = decompose_tags(patterns, &raw.raw_tags);
    let activities = classify(&raw.title);

    let date = parse_date(&raw.date).map_err(|source| RecordError::Date {
        line,
        field: "date",
        source,
    })?;
    let end_date = parse_date(&raw.end_date).map_err(|source| RecordError::Date {
        line,
        field: "end_date",
        source,
    })?;

    let Some(date) = fill.fill(date) else {
        return Err(RecordError::MissingStartDate { line });
    };
    let starts_after_last = order.check(Span { date, end_date });

    Ok(EventRecord {
        line,
        date,
        end_date,
        title: raw.title,
        raw_tags: raw.raw_tags,
        distance: tags.distance,
        difficulty: tags.difficulty,
        wet: tags.wet,
        activities,
        starts_after_last,
    })
}
