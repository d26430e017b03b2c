//! Durable reservation record store port definition.

use crate::domain::{PersistenceError, Reservation};

/// Port for the ordered list of submitted reservations.
///
/// The list is read and written as a whole; there are no partial writes and no
/// query capability beyond a full read.
pub trait RecordStore {
    /// Read the full list. An absent store reads as an empty list.
    fn load(&self) -> Result<Vec<Reservation>, PersistenceError>;

    /// Replace the stored list with `records`.
    ///
    /// Either the whole list is written or the previous one is left in place.
    fn save(&self, records: &[Reservation]) -> Result<(), PersistenceError>;
}
