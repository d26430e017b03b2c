pub mod configure;
pub mod reservations;
pub mod reserve;
