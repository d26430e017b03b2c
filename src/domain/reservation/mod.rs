pub mod input;
pub mod record;
pub mod validation;

pub use input::ReservationInput;
pub(crate) use record::ReservationParts;
pub use record::{CONFIRMATION_CODE_LEN, Reservation, ReservationId};
pub use validation::{DATE_FORMAT, Field, FieldError, Rule, ValidationErrors, validate};
pub(crate) use validation::check;
