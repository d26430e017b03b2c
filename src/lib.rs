//! nexus: car configuration pricing and test-drive reservations.
//!
//! The [`ConfigurationStore`] holds the selected options and derives the price; the
//! reservation pipeline ([`app::commands::reserve::submit`]) validates contact
//! details and appends immutable [`Reservation`] records to a [`ports::RecordStore`].

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{options, quote, reservations, reserve};
pub use app::commands::configure::{OptionListing, Quote, Selection};
pub use app::settings_reader::load_settings;
pub use app::AppContext;
pub use domain::{
    AppError, CarOption, Category, Configuration, ConfigurationStore, Field, FieldError, OptionId,
    PersistenceError, Reservation, ReservationId, ReservationInput, Rule, Settings,
    ValidationErrors, format_price, validate,
};
