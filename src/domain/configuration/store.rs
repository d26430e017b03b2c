//! Owned, injectable holder of the live car configuration.

use tracing::info;

use super::car::{Configuration, DEFAULT_BASE_PRICE};
use crate::domain::{AppError, CarOption, Category};

/// Holds the currently selected options and derives the total price.
///
/// The total is derived on every read from the current options, so it can never
/// go stale. Mutations are expected to be serialized by the caller.
#[derive(Debug, Clone)]
pub struct ConfigurationStore {
    base_price: u64,
    current: Configuration,
}

impl ConfigurationStore {
    /// Create a store holding the default configuration.
    pub fn new(base_price: u64) -> Self {
        Self::with_configuration(base_price, Configuration::default())
    }

    /// Create a store starting from an explicit configuration.
    pub fn with_configuration(base_price: u64, configuration: Configuration) -> Self {
        Self { base_price, current: configuration }
    }

    /// Replace the option for `category`.
    ///
    /// A malformed option is a caller bug: the call fails with
    /// [`AppError::ContractViolation`] and the store keeps its previous state.
    pub fn select_option(&mut self, category: Category, option: CarOption) -> Result<(), AppError> {
        option.check_contract(category)?;
        self.current.set(category, option);

        info!(
            target: "nexus::analytics",
            event = "car_configured",
            color = %self.current.color.name,
            wheels = %self.current.wheels.name,
            interior = %self.current.interior.name,
            total_price = self.total_price(),
        );
        Ok(())
    }

    /// Deep copy of the current configuration, unaffected by later selections.
    pub fn snapshot(&self) -> Configuration {
        self.current.clone()
    }

    /// Borrow the live configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.current
    }

    pub fn base_price(&self) -> u64 {
        self.base_price
    }

    /// Base price plus the surcharge of every selected option.
    pub fn total_price(&self) -> u64 {
        self.current.total_price(self.base_price)
    }
}

impl Default for ConfigurationStore {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PRICE)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::domain::OptionId;
    use crate::testing::{analytics_lines, capture_logs};

    fn wheels(id: &str, price: u32) -> CarOption {
        CarOption::new(OptionId::new(id).unwrap(), format!("{id} wheels"), price)
    }

    #[test]
    fn starts_at_base_price() {
        let store = ConfigurationStore::default();
        assert_eq!(store.total_price(), 89_900);
        assert_eq!(store.configuration(), &Configuration::default());
    }

    #[test]
    fn selecting_wheels_adds_surcharge() {
        let mut store = ConfigurationStore::default();
        store.select_option(Category::Wheels, wheels("sport", 2500)).unwrap();
        assert_eq!(store.total_price(), 92_400);
    }

    #[test]
    fn snapshot_is_independent_of_later_selections() {
        let mut store = ConfigurationStore::default();
        let snapshot = store.snapshot();

        store.select_option(Category::Wheels, wheels("sport", 2500)).unwrap();
        store
            .select_option(
                Category::Color,
                CarOption::color(OptionId::new("crimson").unwrap(), "Crimson Red", 2000, "#A4161A"),
            )
            .unwrap();

        assert_eq!(snapshot, Configuration::default());
        assert_ne!(store.snapshot(), snapshot);
    }

    #[test]
    fn contract_violation_leaves_store_untouched() {
        let mut store = ConfigurationStore::default();
        store.select_option(Category::Wheels, wheels("sport", 2500)).unwrap();

        let no_swatch = CarOption::new(OptionId::new("crimson").unwrap(), "Crimson Red", 2000);
        let err = store.select_option(Category::Color, no_swatch).unwrap_err();

        assert!(matches!(err, AppError::ContractViolation(_)));
        assert_eq!(store.configuration().color, Configuration::default().color);
        assert_eq!(store.total_price(), 92_400);
    }

    #[test]
    fn selection_emits_car_configured_event() {
        let mut store = ConfigurationStore::default();

        let ((), logs) = capture_logs(|| {
            store.select_option(Category::Wheels, wheels("sport", 2500)).unwrap();
        });

        let events = analytics_lines(&logs);
        assert_eq!(events.len(), 1, "logs: {logs}");
        assert!(events[0].contains("car_configured"));
        assert!(events[0].contains("wheels=sport wheels"));
        assert!(events[0].contains("total_price=92400"));
    }

    #[test]
    fn rejected_selection_emits_nothing() {
        let mut store = ConfigurationStore::default();
        let no_swatch = CarOption::new(OptionId::new("crimson").unwrap(), "Crimson Red", 2000);

        let (result, logs) = capture_logs(|| store.select_option(Category::Color, no_swatch));

        assert!(result.is_err());
        assert!(analytics_lines(&logs).is_empty(), "logs: {logs}");
    }

    fn option_for(category: Category, index: usize, price: u32) -> CarOption {
        let id = OptionId::new(&format!("{}-{}", category, index)).unwrap();
        if category.requires_hex() {
            CarOption::color(id, format!("Paint {index}"), price, "#123ABC")
        } else {
            CarOption::new(id, format!("Option {index}"), price)
        }
    }

    fn selection_strategy() -> impl Strategy<Value = Vec<(usize, u32)>> {
        prop::collection::vec((0usize..3, 0u32..1_000_000), 0..40)
    }

    proptest! {
        #[test]
        fn total_tracks_current_prices(
            base in 0u64..10_000_000,
            selections in selection_strategy(),
        ) {
            let mut store = ConfigurationStore::new(base);

            for (index, (category_index, price)) in selections.into_iter().enumerate() {
                let category = Category::ALL[category_index];
                store.select_option(category, option_for(category, index, price)).unwrap();

                let configuration = store.configuration();
                let expected = base
                    + u64::from(configuration.color.price)
                    + u64::from(configuration.wheels.price)
                    + u64::from(configuration.interior.price);
                prop_assert_eq!(store.total_price(), expected);
                prop_assert_eq!(configuration.get(category).price, price);
            }
        }
    }
}
