//! Clock port definition.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current instant and calendar date.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Today's calendar date in the evaluator's local timezone.
    fn today(&self) -> NaiveDate;
}
