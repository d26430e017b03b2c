pub mod api;
pub mod cli;
pub mod commands;
mod context;
pub mod settings_reader;

pub use context::AppContext;
