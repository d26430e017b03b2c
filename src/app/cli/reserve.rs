//! `reserve` and `reservations` command implementation.

use clap::Args;
use dialoguer::Input;

use crate::app::api;
use crate::app::commands::configure::Selection;
use crate::domain::{AppError, ReservationInput, Settings, format_price};

/// Contact fields of the reservation form.
#[derive(Args, Debug, Default)]
pub struct ContactArgs {
    /// Full name
    #[arg(long)]
    name: Option<String>,
    /// Email address
    #[arg(long)]
    email: Option<String>,
    /// Phone number
    #[arg(long)]
    phone: Option<String>,
    /// Preferred date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,
}

pub fn run_reserve(
    selection: Selection,
    contact: ContactArgs,
    interactive: bool,
    settings: &Settings,
) -> Result<(), AppError> {
    let input = if interactive { prompt_missing(contact)? } else { from_flags(contact) };
    let reservation = api::reserve(settings, &selection, input)?;

    println!("✅ Reservation confirmed! We'll contact you soon.");
    println!("  Confirmation code: {}", reservation.confirmation_code());
    println!(
        "  Total: {}",
        format_price(reservation.total_price(), &settings.pricing.currency_symbol)
    );
    Ok(())
}

pub fn run_reservations(settings: &Settings) -> Result<(), AppError> {
    let reservations = api::reservations(settings)?;
    if reservations.is_empty() {
        println!("No reservations yet.");
        return Ok(());
    }

    for reservation in &reservations {
        println!(
            "{}  {}  {}  {}",
            reservation.id(),
            reservation.date(),
            reservation.name(),
            format_price(reservation.total_price(), &settings.pricing.currency_symbol)
        );
    }
    Ok(())
}

fn from_flags(contact: ContactArgs) -> ReservationInput {
    ReservationInput {
        name: contact.name.unwrap_or_default(),
        email: contact.email.unwrap_or_default(),
        phone: contact.phone.unwrap_or_default(),
        date: contact.date.unwrap_or_default(),
    }
}

fn prompt_missing(contact: ContactArgs) -> Result<ReservationInput, AppError> {
    Ok(ReservationInput {
        name: prompt_field(contact.name, "Full name")?,
        email: prompt_field(contact.email, "Email")?,
        phone: prompt_field(contact.phone, "Phone")?,
        date: prompt_field(contact.date, "Preferred date (YYYY-MM-DD)")?,
    })
}

fn prompt_field(value: Option<String>, prompt: &str) -> Result<String, AppError> {
    if let Some(value) = value {
        return Ok(value);
    }
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|err| {
            AppError::Prompt(format!("Failed to read {}: {}", prompt.to_lowercase(), err))
        })
}
