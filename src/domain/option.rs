//! Selectable product options.

use serde::{Deserialize, Serialize};

use super::{AppError, Category, OptionId};

/// One selectable option within a category.
///
/// `price` is a surcharge in whole euros on top of the base price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarOption {
    pub id: OptionId,
    pub name: String,
    pub price: u32,
    /// `#RRGGBB` swatch. Present on color options only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

impl CarOption {
    /// Build a wheels or interior option.
    pub fn new(id: OptionId, name: impl Into<String>, price: u32) -> Self {
        Self { id, name: name.into(), price, hex: None }
    }

    /// Build a color option carrying its swatch.
    pub fn color(
        id: OptionId,
        name: impl Into<String>,
        price: u32,
        hex: impl Into<String>,
    ) -> Self {
        Self { id, name: name.into(), price, hex: Some(hex.into()) }
    }

    /// Check that this option is well-formed for `category`.
    ///
    /// The id and the non-negative price are guaranteed by their types; this covers
    /// the display name and the hex rule.
    pub fn check_contract(&self, category: Category) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::ContractViolation(format!(
                "{} option '{}' has a blank name",
                category, self.id
            )));
        }

        match (&self.hex, category.requires_hex()) {
            (Some(hex), true) if is_hex_color(hex) => Ok(()),
            (Some(hex), true) => Err(AppError::ContractViolation(format!(
                "color option '{}' has malformed hex '{}': expected #RRGGBB",
                self.id, hex
            ))),
            (None, true) => Err(AppError::ContractViolation(format!(
                "color option '{}' is missing its hex value",
                self.id
            ))),
            (Some(_), false) => Err(AppError::ContractViolation(format!(
                "{} option '{}' must not carry a hex value",
                category, self.id
            ))),
            (None, false) => Ok(()),
        }
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|digits| digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> OptionId {
        OptionId::new(value).unwrap()
    }

    #[test]
    fn color_with_swatch_is_well_formed() {
        let option = CarOption::color(id("silver"), "Quantum Silver", 0, "#C0C0C0");
        assert!(option.check_contract(Category::Color).is_ok());
    }

    #[test]
    fn color_without_swatch_violates_contract() {
        let option = CarOption::new(id("silver"), "Quantum Silver", 0);
        let err = option.check_contract(Category::Color).unwrap_err();
        assert!(matches!(err, AppError::ContractViolation(msg) if msg.contains("missing")));
    }

    #[test]
    fn malformed_swatch_violates_contract() {
        for hex in ["C0C0C0", "#C0C0C", "#GGGGGG", "#C0C0C0C0"] {
            let option = CarOption::color(id("silver"), "Quantum Silver", 0, hex);
            assert!(option.check_contract(Category::Color).is_err(), "{hex} should be rejected");
        }
    }

    #[test]
    fn wheels_with_swatch_violates_contract() {
        let option = CarOption::color(id("sport"), "20\" Sport Wheels", 2500, "#000000");
        assert!(option.check_contract(Category::Wheels).is_err());
    }

    #[test]
    fn blank_name_violates_contract() {
        let option = CarOption::new(id("black"), "   ", 0);
        assert!(option.check_contract(Category::Interior).is_err());
    }

    #[test]
    fn hex_is_omitted_from_json_when_absent() {
        let option = CarOption::new(id("standard"), "19\" Aero Wheels", 0);
        let json = serde_json::to_value(&option).unwrap();
        assert!(json.get("hex").is_none());
        assert_eq!(json["price"], 0);
    }
}
