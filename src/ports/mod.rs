mod clock;
mod option_catalog;
mod record_store;

pub use clock::Clock;
pub use option_catalog::OptionCatalog;
pub use record_store::RecordStore;
