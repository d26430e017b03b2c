pub mod embedded_option_catalog;
pub mod filesystem_record_store;
pub mod memory_record_store;
mod record_codec;
pub mod system_clock;

pub use embedded_option_catalog::EmbeddedOptionCatalog;
pub use filesystem_record_store::FilesystemRecordStore;
pub use memory_record_store::MemoryRecordStore;
pub use system_clock::SystemClock;
