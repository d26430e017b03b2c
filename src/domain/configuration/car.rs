//! The car configuration value: one option per category.

use serde::{Deserialize, Serialize};

use crate::domain::{CarOption, Category, OptionId};

/// Price of the car before any option surcharge, in whole euros.
pub const DEFAULT_BASE_PRICE: u64 = 89_900;

/// The selected option for every category.
///
/// Cloning yields a fully independent copy; every field is owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub color: CarOption,
    pub wheels: CarOption,
    pub interior: CarOption,
}

impl Configuration {
    /// The option currently selected for `category`.
    pub fn get(&self, category: Category) -> &CarOption {
        match category {
            Category::Color => &self.color,
            Category::Wheels => &self.wheels,
            Category::Interior => &self.interior,
        }
    }

    pub(crate) fn set(&mut self, category: Category, option: CarOption) {
        match category {
            Category::Color => self.color = option,
            Category::Wheels => self.wheels = option,
            Category::Interior => self.interior = option,
        }
    }

    /// Sum of every selected option's surcharge.
    pub fn options_total(&self) -> u64 {
        Category::ALL.iter().map(|category| u64::from(self.get(*category).price)).sum()
    }

    /// `base_price` plus every surcharge.
    pub fn total_price(&self, base_price: u64) -> u64 {
        base_price + self.options_total()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            color: CarOption::color(default_id("silver"), "Quantum Silver", 0, "#C0C0C0"),
            wheels: CarOption::new(default_id("standard"), "19\" Aero Wheels", 0),
            interior: CarOption::new(default_id("black"), "Pure Black", 0),
        }
    }
}

fn default_id(value: &'static str) -> OptionId {
    OptionId::new(value).expect("Default option id must be valid")
}
