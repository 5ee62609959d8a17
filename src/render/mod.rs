//! Labelled field model handed to the presentation layer, and the presenter
//! that turns it into text.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::config::Config;
use crate::currency::{format_currency_value, format_date, CurrencyCode, FormatOptions, LocaleConfig};
use crate::domain::Displayable;

/// A raw, unformatted field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Money(Decimal),
    Date(DateTime<Utc>),
    Period(Duration),
    Flag(bool),
}

/// A single `(label, value)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: &'static str,
    pub value: FieldValue,
}

impl Field {
    pub fn new(label: &'static str, value: FieldValue) -> Self {
        Self { label, value }
    }

    pub fn text(label: &'static str, value: impl Into<String>) -> Self {
        Self::new(label, FieldValue::Text(value.into()))
    }

    pub fn integer(label: &'static str, value: i64) -> Self {
        Self::new(label, FieldValue::Integer(value))
    }

    pub fn money(label: &'static str, value: Decimal) -> Self {
        Self::new(label, FieldValue::Money(value))
    }

    pub fn date(label: &'static str, value: DateTime<Utc>) -> Self {
        Self::new(label, FieldValue::Date(value))
    }

    pub fn period(label: &'static str, value: Duration) -> Self {
        Self::new(label, FieldValue::Period(value))
    }

    pub fn flag(label: &'static str, value: bool) -> Self {
        Self::new(label, FieldValue::Flag(value))
    }
}

/// Formats rendered fields with locale and currency preferences.
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    pub locale: LocaleConfig,
    pub currency: CurrencyCode,
    pub options: FormatOptions,
}

impl Presenter {
    pub fn new(locale: LocaleConfig, currency: CurrencyCode, options: FormatOptions) -> Self {
        Self {
            locale,
            currency,
            options,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.locale.clone(),
            config.currency.clone(),
            config.format.clone(),
        )
    }

    pub fn format_money(&self, amount: Decimal) -> String {
        format_currency_value(amount, &self.currency, &self.locale, &self.options)
    }

    pub fn format_value(&self, value: &FieldValue) -> String {
        match value {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Integer(number) => number.to_string(),
            FieldValue::Money(amount) => self.format_money(*amount),
            FieldValue::Date(instant) => format_date(&self.locale, instant.date_naive()),
            FieldValue::Period(period) => format!("{} days", period.num_days()),
            FieldValue::Flag(flag) => flag.to_string(),
        }
    }

    pub fn lines(&self, fields: &[Field]) -> Vec<String> {
        fields
            .iter()
            .map(|field| format!("{}: {}", field.label, self.format_value(&field.value)))
            .collect()
    }

    /// Renders a record as `Label: value` lines, shared fields first.
    pub fn show<D: Displayable + ?Sized>(&self, record: &D) -> String {
        self.lines(&record.render()).join("\n")
    }
}
