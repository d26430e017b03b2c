pub mod car;
pub mod settings;
pub mod store;

pub use car::{Configuration, DEFAULT_BASE_PRICE};
pub use settings::{PricingSettings, SETTINGS_FILE, Settings, StorageSettings};
pub use store::ConfigurationStore;
