//! Event line parsing: tokenizing, tag decomposition, activity
//! classification and date normalization.

pub mod activity;
pub mod date;
pub mod pattern;
pub mod record;
pub mod tags;
pub mod tokenize;

pub use activity::classify;
pub use date::parse_date;
pub use pattern::Patterns;
pub use record::EventRecord;
pub use tags::decompose_tags;
pub use tokenize::tokenize_line;
