use crate::domain::Settings;
use crate::ports::{Clock, RecordStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: RecordStore, C: Clock> {
    store: S,
    clock: C,
    settings: Settings,
}

impl<S: RecordStore, C: Clock> AppContext<S, C> {
    /// Create a new application context.
    pub fn new(store: S, clock: C, settings: Settings) -> Self {
        Self { store, clock, settings }
    }

    /// Get a reference to the reservation record store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Get a reference to the loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Price of the car before option surcharges.
    pub fn base_price(&self) -> u64 {
        self.settings.pricing.base_price
    }
}
