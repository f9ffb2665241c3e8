use crate::error::DateParseError;
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a "day/month/year" field. The empty string means no date.
pub fn parse_date(value: &str) -> Result<Option<NaiveDate>, DateParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    // chrono accepts short years for %Y; the log always writes four digits.
    let four_digit_year = value
        .rsplit('/')
        .next()
        .is_some_and(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()));
    if !four_digit_year {
        return Err(DateParseError(value.to_string()));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| DateParseError(value.to_string()))
}
