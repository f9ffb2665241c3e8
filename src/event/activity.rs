use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    #[serde(rename = "MTB")]
    Mtb,
    Bushwalking,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::Mtb => f.write_str("MTB"),
            Activity::Bushwalking => f.write_str("Bushwalking"),
        }
    }
}

/// Keyword (lowercase) -> activity. Order here is the order of the result.
pub const VOCABULARY: &[(&str, Activity)] = &[
    ("mtb", Activity::Mtb),
    ("bushwalk", Activity::Bushwalking),
];

/// Activities whose keyword occurs anywhere in the title, ignoring case.
/// None when nothing matched.
pub fn classify(title: &str) -> Option<Vec<Activity>> {
    let title = title.to_lowercase();
    let found: Vec<Activity> = VOCABULARY
        .iter()
        .filter(|(keyword, _)| title.contains(keyword))
        .map(|(_, activity)| *activity)
        .collect();

    if found.is_empty() { None } else { Some(found) }
}
