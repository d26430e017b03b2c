//! Library API wired to the durable record store and the wall clock.

use crate::adapters::{EmbeddedOptionCatalog, FilesystemRecordStore, SystemClock};
use crate::app::AppContext;
use crate::app::commands::configure::{self, OptionListing, Quote, Selection};
use crate::app::commands::{reservations as reservation_list, reserve as reservation_pipeline};
use crate::domain::{
    AppError, Category, ConfigurationStore, Reservation, ReservationInput, Settings,
};

/// List catalog options, optionally for a single category.
pub fn options(category: Option<Category>) -> Result<Vec<OptionListing>, AppError> {
    let catalog = EmbeddedOptionCatalog::new()?;
    Ok(configure::list_options(&catalog, category))
}

/// Price a selection of option ids.
pub fn quote(settings: &Settings, selection: &Selection) -> Result<Quote, AppError> {
    let catalog = EmbeddedOptionCatalog::new()?;
    configure::quote(&catalog, settings.pricing.base_price, selection)
}

/// Configure the car from `selection` and submit a reservation for it.
pub fn reserve(
    settings: &Settings,
    selection: &Selection,
    input: ReservationInput,
) -> Result<Reservation, AppError> {
    let catalog = EmbeddedOptionCatalog::new()?;
    let mut store = ConfigurationStore::new(settings.pricing.base_price);
    configure::apply_selection(&mut store, &catalog, selection)?;

    let ctx = context(settings);
    reservation_pipeline::submit(&ctx, input, store.snapshot())
}

/// All stored reservations in submission order.
pub fn reservations(settings: &Settings) -> Result<Vec<Reservation>, AppError> {
    reservation_list::list(&context(settings))
}

fn context(settings: &Settings) -> AppContext<FilesystemRecordStore, SystemClock> {
    let store = FilesystemRecordStore::from_settings(&settings.storage);
    AppContext::new(store, SystemClock, settings.clone())
}
