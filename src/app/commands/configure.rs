//! Turning option picks into a configuration and a price.

use serde::Serialize;

use crate::domain::{AppError, CarOption, Category, Configuration, ConfigurationStore};
use crate::ports::OptionCatalog;

/// Option ids picked per category. `None` keeps the current option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub color: Option<String>,
    pub wheels: Option<String>,
    pub interior: Option<String>,
}

impl Selection {
    /// Picked id for `category`, if any.
    pub fn get(&self, category: Category) -> Option<&str> {
        match category {
            Category::Color => self.color.as_deref(),
            Category::Wheels => self.wheels.as_deref(),
            Category::Interior => self.interior.as_deref(),
        }
    }
}

/// A priced configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub configuration: Configuration,
    pub base_price: u64,
    pub total_price: u64,
}

impl Quote {
    pub fn from_store(store: &ConfigurationStore) -> Self {
        Self {
            configuration: store.snapshot(),
            base_price: store.base_price(),
            total_price: store.total_price(),
        }
    }
}

/// One catalog entry with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionListing {
    pub category: Category,
    pub option: CarOption,
}

/// Apply every picked option from `catalog` to `store`, in category order.
///
/// Fails on the first unknown id; categories before it stay applied.
pub fn apply_selection<K: OptionCatalog>(
    store: &mut ConfigurationStore,
    catalog: &K,
    selection: &Selection,
) -> Result<(), AppError> {
    for category in Category::ALL {
        let Some(id) = selection.get(category) else {
            continue;
        };
        let option = catalog.find(category, id).ok_or_else(|| AppError::UnknownOption {
            category: category.to_string(),
            id: id.to_string(),
            available: catalog.ids(category).join(", "),
        })?;
        store.select_option(category, option.clone())?;
    }
    Ok(())
}

/// Price `selection` on top of the default configuration.
pub fn quote<K: OptionCatalog>(
    catalog: &K,
    base_price: u64,
    selection: &Selection,
) -> Result<Quote, AppError> {
    let mut store = ConfigurationStore::new(base_price);
    apply_selection(&mut store, catalog, selection)?;
    Ok(Quote::from_store(&store))
}

/// Catalog options, optionally restricted to one category.
pub fn list_options<K: OptionCatalog>(
    catalog: &K,
    category: Option<Category>,
) -> Vec<OptionListing> {
    Category::ALL
        .into_iter()
        .filter(|candidate| category.is_none_or(|wanted| wanted == *candidate))
        .flat_map(|category| {
            catalog
                .options(category)
                .iter()
                .map(move |option| OptionListing { category, option: option.clone() })
        })
        .collect()
}
