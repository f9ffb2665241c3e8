use chrono::NaiveDate;

/// Dates of an accepted event, as seen by the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// Whether an event starting on `current` comes after `previous`.
///
/// - no previous event: None
/// - previous spans several days: strictly after its start and not before its end
/// - otherwise: same day or later
pub fn starts_after_last(previous: Option<Span>, current: NaiveDate) -> Option<bool> {
    let prev = previous?;
    Some(match prev.end_date {
        Some(end) => current > prev.date && current >= end,
        None => current >= prev.date,
    })
}

/// Carries the previous accepted event through the sequence.
#[derive(Debug, Clone, Default)]
pub struct OrderCheck {
    previous: Option<Span>,
}

impl OrderCheck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check `span` against the previous event, then make it the previous one.
    pub fn check(&mut self, span: Span) -> Option<bool> {
        let result = starts_after_last(self.previous, span.date);
        self.previous = Some(span);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn span(date: NaiveDate, end_date: Option<NaiveDate>) -> Span {
        Span { date, end_date }
    }

    #[test]
    fn first_event_has_no_verdict() {
        assert_eq!(starts_after_last(None, ymd(2020, 1, 1)), None);
    }

    #[test]
    fn same_day_allowed_without_end_date() {
        let prev = span(ymd(2020, 1, 1), None);
        assert_eq!(starts_after_last(Some(prev), ymd(2020, 1, 1)), Some(true));
        assert_eq!(starts_after_last(Some(prev), ymd(2020, 1, 2)), Some(true));
        assert_eq!(starts_after_last(Some(prev), ymd(2019, 12, 31)), Some(false));
    }

    #[test]
    fn overlapping_a_multi_day_event_fails() {
        let prev = span(ymd(2020, 1, 1), Some(ymd(2020, 1, 3)));
        assert_eq!(starts_after_last(Some(prev), ymd(2020, 1, 2)), Some(false));
        assert_eq!(starts_after_last(Some(prev), ymd(2020, 1, 1)), Some(false));
        assert_eq!(starts_after_last(Some(prev), ymd(2020, 1, 3)), Some(true));
        assert_eq!(starts_after_last(Some(prev), ymd(2020, 1, 4)), Some(true));
    }

    #[test]
    fn accumulator_compares_against_immediate_predecessor() {
        let mut check = OrderCheck::new();
        assert_eq!(check.check(span(ymd(2020, 1, 5), None)), None);
        assert_eq!(check.check(span(ymd(2020, 1, 1), None)), Some(false));
        // Compared with 01/01, not 05/01.
        assert_eq!(check.check(span(ymd(2020, 1, 2), None)), Some(true));
    }
}
