mod failing_record_store;
mod fixed_clock;
mod log_capture;

pub use failing_record_store::FailingRecordStore;
pub use fixed_clock::FixedClock;
pub use log_capture::{analytics_lines, capture_logs};

use chrono::{NaiveDate, TimeZone, Utc};

use crate::domain::reservation::ReservationParts;
use crate::domain::{Configuration, Reservation, ReservationId};

/// A stored reservation whose id and timestamp come from `millis`.
///
/// Millis outside chrono's range fall back to the epoch timestamp.
pub fn sample_reservation(millis: i64) -> Reservation {
    Reservation::from_parts(ReservationParts {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+44 20 7946 0958".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
        configuration: Configuration::default(),
        total_price: 89_900,
        id: ReservationId::from_millis(millis),
        timestamp: Utc.timestamp_millis_opt(millis).single().unwrap_or_default(),
    })
}
