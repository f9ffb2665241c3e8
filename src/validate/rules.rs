use crate::event::EventRecord;

/// A named check on one record field.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub field: &'static str,
    pub check: fn(&EventRecord) -> bool,
}

pub const DISTANCE_CODES: &[&str] = &["S", "M", "L", "X", ""];
pub const DIFFICULTY_CODES: &[&str] = &["E", "M", "R", "X", ""];

/// Evaluated in this order for every record.
pub const DEFAULT_RULES: &[Rule] = &[
    Rule {
        name: "chronological",
        field: "starts_after_last",
        check: |r| r.starts_after_last != Some(false),
    },
    Rule {
        name: "distance_valid",
        field: "distance",
        check: |r| DISTANCE_CODES.contains(&r.distance.as_str()),
    },
    Rule {
        name: "difficulty_valid",
        field: "difficulty",
        check: |r| DIFFICULTY_CODES.contains(&r.difficulty.as_str()),
    },
];
