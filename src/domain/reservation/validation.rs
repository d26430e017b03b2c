//! Field rules for reservation input.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ReservationInput;

/// Calendar date layout accepted for the preferred date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

// Applied after all whitespace is removed; separators count toward the length.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\-()]{10,}$").expect("phone pattern must compile"));

/// Reservation form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Date,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Date];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Date => "date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The rule a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rule {
    Required,
    Format,
    PastDate,
}

/// A single field failure with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub rule: Rule,
    pub message: String,
}

impl FieldError {
    fn new(rule: Rule, message: &str) -> Self {
        Self { rule, message: message.to_string() }
    }
}

/// Every field failure of one validation run, keyed by field.
///
/// Empty means the input is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn is_valid(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.fields.get(&field)
    }

    /// Failed rule for `field`, if any.
    pub fn rule(&self, field: Field) -> Option<Rule> {
        self.get(field).map(|error| error.rule)
    }

    /// Failures in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.fields.iter().map(|(field, error)| (*field, error))
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.fields.insert(field, error);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> =
            self.iter().map(|(field, error)| format!("{}: {}", field, error.message)).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Run every field rule against `input`.
///
/// All rules run; each failing field reports one error. `today` is the
/// evaluator's local calendar date.
pub fn validate(input: &ReservationInput, today: NaiveDate) -> ValidationErrors {
    check(input, today).err().unwrap_or_default()
}

/// Validate `input` and, when it passes, return the parsed preferred date.
pub(crate) fn check(
    input: &ReservationInput,
    today: NaiveDate,
) -> Result<NaiveDate, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if let Some(error) = check_name(&input.name) {
        errors.insert(Field::Name, error);
    }
    if let Some(error) = check_email(&input.email) {
        errors.insert(Field::Email, error);
    }
    if let Some(error) = check_phone(&input.phone) {
        errors.insert(Field::Phone, error);
    }
    let date = match parse_date(&input.date, today) {
        Ok(date) => Some(date),
        Err(error) => {
            errors.insert(Field::Date, error);
            None
        }
    };

    match date {
        Some(date) if errors.is_valid() => Ok(date),
        _ => Err(errors),
    }
}

fn parse_date(value: &str, today: NaiveDate) -> Result<NaiveDate, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::new(Rule::Required, "Preferred date is required"));
    }
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| FieldError::new(Rule::Format, "Please enter a valid date (YYYY-MM-DD)"))?;
    if date < today {
        return Err(FieldError::new(Rule::PastDate, "Please select a future date"));
    }
    Ok(date)
}

fn check_name(value: &str) -> Option<FieldError> {
    value.trim().is_empty().then(|| FieldError::new(Rule::Required, "Name is required"))
}

fn check_email(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::new(Rule::Required, "Email is required"));
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Some(FieldError::new(Rule::Format, "Please enter a valid email address"));
    }
    None
}

fn check_phone(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::new(Rule::Required, "Phone number is required"));
    }
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if !PHONE_PATTERN.is_match(&compact) {
        return Some(FieldError::new(Rule::Format, "Please enter a valid phone number"));
    }
    None
}
