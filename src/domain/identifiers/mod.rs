pub mod option_id;
pub mod validation;

pub use option_id::OptionId;
