use crate::error::RecordError;
use crate::event::pattern::Patterns;
use crate::event::record::RawEvent;
use regex::Captures;
use tracing::debug;

/// Split one trimmed event line into date, end date, title and tag block.
///
/// The title pattern is tried first, then the legacy trip-title pattern.
/// A line matching neither is a `RecordError::Tokenize`.
pub fn tokenize_line(patterns: &Patterns, line: usize, text: &str) -> Result<RawEvent, RecordError> {
    if let Some(caps) = patterns.title.captures(text) {
        return Ok(RawEvent {
            line,
            second_of_day: caps.name("marker").is_some(),
            date: group(&caps, "date"),
            end_date: group(&caps, "end_date"),
            title: group(&caps, "title"),
            raw_tags: group(&caps, "tags"),
        });
    }

    if let Some(caps) = patterns.legacy_trip_title.captures(text) {
        debug!(line, "matched legacy trip-title pattern");
        return Ok(RawEvent {
            line,
            second_of_day: false,
            date: group(&caps, "date"),
            end_date: String::new(),
            title: group(&caps, "title"),
            raw_tags: String::new(),
        });
    }

    Err(RecordError::Tokenize {
        line,
        text: text.to_string(),
    })
}

/// Named capture as text; the empty string if the group did not take part.
fn group(caps: &Captures<'_>, name: &str) -> String {
    caps.name(name)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
