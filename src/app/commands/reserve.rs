//! The reservation pipeline: validate, build, persist.

use chrono::SubsecRound;
use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::reservation::{ReservationParts, check};
use crate::domain::{
    AppError, Configuration, PersistenceError, Reservation, ReservationId, ReservationInput,
};
use crate::ports::{Clock, RecordStore};

/// Submit a reservation for `snapshot`.
///
/// Invalid input returns [`AppError::Validation`] without touching the store. A
/// store failure returns [`AppError::Persistence`] and the reservation is not
/// submitted. On success exactly one record is appended.
pub fn submit<S: RecordStore, C: Clock>(
    ctx: &AppContext<S, C>,
    input: ReservationInput,
    snapshot: Configuration,
) -> Result<Reservation, AppError> {
    let date = check(&input, ctx.clock().today()).map_err(|errors| {
        warn!(errors = %errors, "reservation rejected");
        AppError::Validation(errors)
    })?;

    let mut records = ctx.store().load()?;

    let timestamp = ctx.clock().now().trunc_subsecs(3);
    let id = next_id(&records, timestamp.timestamp_millis())?;
    let total_price = snapshot.total_price(ctx.base_price());

    let reservation = Reservation::from_parts(ReservationParts {
        name: input.name,
        email: input.email,
        phone: input.phone,
        date,
        configuration: snapshot,
        total_price,
        id,
        timestamp,
    });

    records.push(reservation.clone());
    ctx.store().save(&records)?;

    info!(
        target: "nexus::analytics",
        event = "reservation_completed",
        reservation_id = %reservation.id(),
        color = %reservation.configuration().color.name,
        wheels = %reservation.configuration().wheels.name,
        interior = %reservation.configuration().interior.name,
        total_price = reservation.total_price(),
    );
    Ok(reservation)
}

/// Id for a submission at `millis`, kept above every id already stored.
fn next_id(records: &[Reservation], millis: i64) -> Result<ReservationId, PersistenceError> {
    let latest = records.iter().filter_map(|record| record.id().millis()).max();
    match latest {
        Some(latest) if latest >= millis => latest
            .checked_add(1)
            .map(ReservationId::from_millis)
            .ok_or(PersistenceError::IdExhausted { latest }),
        _ => Ok(ReservationId::from_millis(millis)),
    }
}
