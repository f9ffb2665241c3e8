use crate::event::activity::Activity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fields captured from one event line, still as text.
///
/// Missing captures are the empty string, never absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    pub line: usize,
    /// Line started with "- " (another event on the same day).
    pub second_of_day: bool,
    pub date: String,
    pub end_date: String,
    pub title: String,
    pub raw_tags: String,
}

impl RawEvent {
    /// Re-serialize in the canonical layout:
    /// `[- ]date[ to end_date] - title[ [tags]]`
    pub fn to_line(&self) -> String {
        let mut out = String::new();
        if self.second_of_day {
            out.push_str("- ");
        }
        if !self.date.is_empty() {
            out.push_str(&self.date);
            if !self.end_date.is_empty() {
                out.push_str(" to ");
                out.push_str(&self.end_date);
            }
            out.push_str(" - ");
        }
        out.push_str(&self.title);
        if !self.raw_tags.is_empty() {
            out.push(' ');
            out.push_str(&self.raw_tags);
        }
        out
    }
}

/// Decomposed tag block. Each field is the empty string when not tagged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags {
    pub distance: String,
    pub difficulty: String,
    pub wet: String,
}

/// A fully enriched event, as printed and exported.
///
/// Field order is the JSON-lines column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// 1-based line in the source file (or in the reloaded JSON-lines file).
    #[serde(skip)]
    pub line: usize,
    pub date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub title: String,
    pub raw_tags: String,
    pub distance: String,
    pub difficulty: String,
    pub wet: String,
    pub activities: Option<Vec<Activity>>,
    /// None only for the first record.
    pub starts_after_last: Option<bool>,
}
