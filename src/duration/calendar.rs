use chrono::{DateTime, Months, Utc};

/// Length of one year and one month measured forward from a reference
/// instant. Both vary with leap years and month lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarLengths {
    pub year_secs: u64,
    pub month_secs: u64,
}

impl CalendarLengths {
    /// Returns `None` if adding a year runs past the end of chrono's range.
    ///
    /// Dates clamp to the end of the target month, so 2024-02-29 plus one
    /// year is 2025-02-28.
    pub fn from_reference(reference: DateTime<Utc>) -> Option<Self> {
        let year_secs = span_secs(reference, Months::new(12))?;
        let month_secs = span_secs(reference, Months::new(1))?;
        log::debug!(
            "calendar lengths from {}: year={}s month={}s",
            reference.to_rfc3339(),
            year_secs,
            month_secs
        );
        Some(Self {
            year_secs,
            month_secs,
        })
    }
}

fn span_secs(reference: DateTime<Utc>, months: Months) -> Option<u64> {
    let later = reference.checked_add_months(months)?;
    u64::try_from((later - reference).num_seconds()).ok()
}
