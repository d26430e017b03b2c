//! Option catalog loaded from embedded assets.

use std::collections::{BTreeMap, BTreeSet};

use include_dir::{Dir, include_dir};
use serde::Deserialize;

use crate::domain::{AppError, CarOption, Category, Configuration};
use crate::ports::OptionCatalog;

/// Embedded catalog directory: one `<category>.toml` per category.
static CATALOG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/catalog");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    options: Vec<CarOption>,
}

/// Catalog of every option the configurator offers.
#[derive(Debug, Clone)]
pub struct EmbeddedOptionCatalog {
    options: BTreeMap<Category, Vec<CarOption>>,
}

impl EmbeddedOptionCatalog {
    /// Load and check every embedded category file.
    pub fn new() -> Result<Self, AppError> {
        let mut options = BTreeMap::new();
        let defaults = Configuration::default();

        for category in Category::ALL {
            let file_name = format!("{}.toml", category.as_str());
            let invalid = |reason: String| AppError::InvalidCatalog {
                category: category.to_string(),
                reason,
            };

            let file = CATALOG_DIR
                .get_file(&file_name)
                .ok_or_else(|| invalid(format!("{} is missing", file_name)))?;
            let content = file
                .contents_utf8()
                .ok_or_else(|| invalid(format!("{} is not valid UTF-8", file_name)))?;
            let parsed: CatalogFile =
                toml::from_str(content).map_err(|e| invalid(e.to_string()))?;

            let mut seen = BTreeSet::new();
            for option in &parsed.options {
                option.check_contract(category)?;
                if !seen.insert(option.id.clone()) {
                    return Err(invalid(format!("duplicate option id '{}'", option.id)));
                }
            }

            let default = defaults.get(category);
            if !parsed.options.contains(default) {
                return Err(invalid(format!("default option '{}' is not listed", default.id)));
            }

            options.insert(category, parsed.options);
        }

        Ok(Self { options })
    }
}

impl OptionCatalog for EmbeddedOptionCatalog {
    fn options(&self, category: Category) -> &[CarOption] {
        self.options.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }
}
