use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AppError;

/// The option categories a car configuration is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Paint color. The only category whose options carry a hex swatch.
    Color,
    Wheels,
    Interior,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Color, Category::Wheels, Category::Interior];

    /// Lowercase identifier used in catalog file names and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Color => "color",
            Category::Wheels => "wheels",
            Category::Interior => "interior",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Color => "Color",
            Category::Wheels => "Wheels",
            Category::Interior => "Interior",
        }
    }

    /// Whether options of this category must carry a hex color value.
    pub fn requires_hex(&self) -> bool {
        matches!(self, Category::Color)
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "color" | "colour" | "paint" => Ok(Category::Color),
            "wheels" | "wheel" => Ok(Category::Wheels),
            "interior" => Ok(Category::Interior),
            _ => Err(AppError::InvalidCategory(name.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
