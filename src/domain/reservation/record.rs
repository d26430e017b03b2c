//! Persisted reservation records.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Configuration;

/// Number of trailing id characters shown to the user as a confirmation code.
pub const CONFIRMATION_CODE_LEN: usize = 6;

/// Reservation identifier: the submission instant in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(String);

impl ReservationId {
    pub(crate) fn from_millis(millis: i64) -> Self {
        Self(millis.to_string())
    }

    /// Numeric value of the id, when it was produced by this crate.
    pub fn millis(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Trailing characters of the id, shown to the user after submission.
    pub fn confirmation_code(&self) -> &str {
        let start = self
            .0
            .char_indices()
            .rev()
            .nth(CONFIRMATION_CODE_LEN - 1)
            .map(|(index, _)| index)
            .unwrap_or(0);
        &self.0[start..]
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A submitted reservation.
///
/// Built only by the reservation pipeline and never changed afterwards, so the
/// fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    name: String,
    email: String,
    phone: String,
    date: NaiveDate,
    configuration: Configuration,
    total_price: u64,
    id: ReservationId,
    timestamp: DateTime<Utc>,
}

/// Field values of a reservation that already passed validation.
pub(crate) struct ReservationParts {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub configuration: Configuration,
    pub total_price: u64,
    pub id: ReservationId,
    pub timestamp: DateTime<Utc>,
}

impl Reservation {
    pub(crate) fn from_parts(parts: ReservationParts) -> Self {
        Self {
            name: parts.name,
            email: parts.email,
            phone: parts.phone,
            date: parts.date,
            configuration: parts.configuration,
            total_price: parts.total_price,
            id: parts.id,
            timestamp: parts.timestamp,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Preferred calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Configuration frozen at submission time.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    pub fn id(&self) -> &ReservationId {
        &self.id
    }

    /// Submission instant.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn confirmation_code(&self) -> &str {
        self.id.confirmation_code()
    }
}
