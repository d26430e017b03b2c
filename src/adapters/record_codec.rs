//! JSON encoding of the reservation list, shared by the record store adapters.

use crate::domain::{PersistenceError, Reservation};

/// Serialize `records`, refusing lists larger than `quota` bytes.
pub(crate) fn encode(records: &[Reservation], quota: u64) -> Result<Vec<u8>, PersistenceError> {
    let bytes = serde_json::to_vec(records)?;
    let needed = bytes.len() as u64;
    if needed > quota {
        return Err(PersistenceError::QuotaExceeded { needed, quota });
    }
    Ok(bytes)
}

/// Deserialize a stored list. Blank content reads as empty.
pub(crate) fn decode(content: &str) -> Result<Vec<Reservation>, serde_json::Error> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(content)
}
