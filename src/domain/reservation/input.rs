use serde::{Deserialize, Serialize};

/// Raw reservation form values for one submission attempt.
///
/// Fields hold exactly what the user typed; [`super::validate`] decides whether
/// they are usable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Preferred date as `YYYY-MM-DD`.
    pub date: String,
}

impl ReservationInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), email: email.into(), phone: phone.into(), date: date.into() }
    }
}
