use std::cell::Cell;

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use crate::ports::Clock;

/// Clock frozen at a chosen instant; `advance` moves it forward.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    /// Clock reading `rfc3339`, with `today` taken from its UTC date.
    pub fn at(rfc3339: &str) -> Self {
        let now = DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc);
        Self { now: Cell::new(now) }
    }

    pub fn advance(&self, delta: TimeDelta) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }

    fn today(&self) -> NaiveDate {
        self.now.get().date_naive()
    }
}
