use chrono::NaiveDate;

/// Carries the last non-empty date forward in file order.
#[derive(Debug, Clone, Default)]
pub struct FillDown {
    last: Option<NaiveDate>,
}

impl FillDown {
    pub fn new() -> Self {
        Self::default()
    }

    /// The date itself if present, otherwise the last date seen.
    pub fn fill(&mut self, date: Option<NaiveDate>) -> Option<NaiveDate> {
        if date.is_some() {
            self.last = date;
        }
        self.last
    }

    /// Forget the carried date. A later dateless line then has nothing to
    /// inherit until a dated line is accepted again.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
