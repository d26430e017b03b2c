//! Option catalog port definition.

use crate::domain::{CarOption, Category};

/// Trait for accessing the options offered per category.
pub trait OptionCatalog {
    /// Options of `category` in display order.
    fn options(&self, category: Category) -> &[CarOption];

    /// Find an option by id within `category`.
    fn find(&self, category: Category, id: &str) -> Option<&CarOption> {
        self.options(category).iter().find(|option| option.id.as_str() == id)
    }

    /// All option ids of `category`, in display order.
    fn ids(&self, category: Category) -> Vec<&str> {
        self.options(category).iter().map(|option| option.id.as_str()).collect()
    }
}
