use crate::app::AppContext;
use crate::domain::{AppError, Reservation};
use crate::ports::{Clock, RecordStore};

/// All stored reservations in submission order.
pub fn list<S: RecordStore, C: Clock>(
    ctx: &AppContext<S, C>,
) -> Result<Vec<Reservation>, AppError> {
    Ok(ctx.store().load()?)
}
