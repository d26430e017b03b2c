pub mod category;
pub mod configuration;
pub mod error;
pub mod identifiers;
pub mod option;
pub mod price;
pub mod reservation;

pub use category::Category;
pub use configuration::{
    Configuration, ConfigurationStore, DEFAULT_BASE_PRICE, PricingSettings, SETTINGS_FILE,
    Settings, StorageSettings,
};
pub use error::{AppError, PersistenceError};
pub use identifiers::OptionId;
pub use option::CarOption;
pub use price::format_price;
pub use reservation::{
    Field, FieldError, Reservation, ReservationId, ReservationInput, Rule, ValidationErrors,
    validate,
};
