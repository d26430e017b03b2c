use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::ports::Clock;

/// Wall clock using the process's local timezone for calendar dates.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
