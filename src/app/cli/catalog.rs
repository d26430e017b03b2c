//! `options` and `quote` command output.

use crate::app::api;
use crate::app::commands::configure::Selection;
use crate::domain::{AppError, Category, Settings, format_price};

pub fn run_options(category: Option<Category>, settings: &Settings) -> Result<(), AppError> {
    let symbol = &settings.pricing.currency_symbol;
    let listings = api::options(category)?;

    let mut current = None;
    for listing in &listings {
        if current != Some(listing.category) {
            if current.is_some() {
                println!();
            }
            println!("{}:", listing.category.display_name());
            current = Some(listing.category);
        }
        let option = &listing.option;
        let swatch = option.hex.as_deref().map(|hex| format!("  {}", hex)).unwrap_or_default();
        println!(
            "  {:<12} {:<24} +{}{}",
            option.id.as_str(),
            option.name,
            format_price(u64::from(option.price), symbol),
            swatch
        );
    }
    Ok(())
}

pub fn run_quote(selection: Selection, settings: &Settings) -> Result<(), AppError> {
    let symbol = &settings.pricing.currency_symbol;
    let quote = api::quote(settings, &selection)?;

    println!("Base price: {}", format_price(quote.base_price, symbol));
    for category in Category::ALL {
        let option = quote.configuration.get(category);
        println!(
            "  {:<9} {} (+{})",
            format!("{}:", category.display_name()),
            option.name,
            format_price(u64::from(option.price), symbol)
        );
    }
    println!("Total: {}", format_price(quote.total_price, symbol));
    Ok(())
}
