use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::common::{Clock, Displayable, NamedEntity, SystemClock};
use crate::domain::usability::{window_end, UsabilityEvaluable};
use crate::errors::{RecordError, Result};
use crate::render::{Field, Presenter};

pub const DEFAULT_SOFTWARE_NAME: &str = "Unnamed Software";
pub const DEFAULT_MANUFACTURER: &str = "Unknown Manufacturer";
pub const DEFAULT_TRIAL_PERIOD_DAYS: i64 = 30;
pub const DEFAULT_USAGE_PERIOD_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SoftwareKind {
    Free,
    ConditionalFree,
    Commercial,
}

impl SoftwareKind {
    pub fn label(self) -> &'static str {
        match self {
            SoftwareKind::Free => "Free",
            SoftwareKind::ConditionalFree => "Conditionally Free",
            SoftwareKind::Commercial => "Commercial",
        }
    }
}

impl fmt::Display for SoftwareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity fields common to every software entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SoftwareInfo {
    name: String,
    manufacturer: String,
}

impl SoftwareInfo {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn fields(&self) -> Vec<Field> {
        vec![
            Field::text("Name", self.name.clone()),
            Field::text("Manufacturer", self.manufacturer.clone()),
        ]
    }
}

/// Optional identity fields supplied at construction.
#[derive(Debug, Clone, Default)]
pub struct SoftwareFields {
    pub name: Option<String>,
    pub manufacturer: Option<String>,
}

impl SoftwareFields {
    pub fn new(name: impl Into<String>, manufacturer: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            manufacturer: Some(manufacturer.into()),
        }
    }

    fn resolve(self) -> SoftwareInfo {
        SoftwareInfo {
            name: self
                .name
                .unwrap_or_else(|| DEFAULT_SOFTWARE_NAME.to_string()),
            manufacturer: self
                .manufacturer
                .unwrap_or_else(|| DEFAULT_MANUFACTURER.to_string()),
        }
    }
}

/// Software usable without restriction. Ordered and compared by name only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeSoftware {
    info: SoftwareInfo,
}

impl FreeSoftware {
    pub fn new(name: impl Into<String>, manufacturer: impl Into<String>) -> Self {
        Self::build(SoftwareFields::new(name, manufacturer))
    }

    pub fn build(fields: SoftwareFields) -> Self {
        let info = fields.resolve();
        debug!(name = info.name(), "free software constructed");
        Self { info }
    }

    pub fn info(&self) -> &SoftwareInfo {
        &self.info
    }
}

impl PartialEq for FreeSoftware {
    fn eq(&self, other: &Self) -> bool {
        self.info.name == other.info.name
    }
}

impl Eq for FreeSoftware {}

impl PartialOrd for FreeSoftware {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FreeSoftware {
    fn cmp(&self, other: &Self) -> Ordering {
        self.info.name.cmp(&other.info.name)
    }
}

impl UsabilityEvaluable for FreeSoftware {
    fn expires_at(&self) -> Option<DateTime<Utc>> {
        None
    }
}

impl Displayable for FreeSoftware {
    fn shared_fields(&self) -> Vec<Field> {
        self.info.fields()
    }

    fn extra_fields(&self) -> Vec<Field> {
        Vec::new()
    }
}

/// Installation instant and trial length for [`ConditionalFreeSoftware`].
#[derive(Debug, Clone, Default)]
pub struct TrialTerms {
    pub installed_at: Option<DateTime<Utc>>,
    pub trial_period: Option<Duration>,
}

/// Software usable until its trial period runs out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionalFreeSoftware {
    info: SoftwareInfo,
    installed_at: DateTime<Utc>,
    #[serde(with = "crate::utils::serde_duration")]
    trial_period: Duration,
}

impl ConditionalFreeSoftware {
    pub fn new(
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        installed_at: DateTime<Utc>,
        trial_period: Duration,
    ) -> Self {
        Self::build(
            SoftwareFields::new(name, manufacturer),
            TrialTerms {
                installed_at: Some(installed_at),
                trial_period: Some(trial_period),
            },
            &SystemClock,
        )
    }

    pub fn build(fields: SoftwareFields, terms: TrialTerms, clock: &dyn Clock) -> Self {
        let info = fields.resolve();
        let installed_at = terms.installed_at.unwrap_or_else(|| clock.now());
        let trial_period = terms
            .trial_period
            .unwrap_or_else(|| Duration::days(DEFAULT_TRIAL_PERIOD_DAYS));
        debug!(
            name = info.name(),
            %installed_at,
            trial_days = trial_period.num_days(),
            "trial software constructed"
        );
        Self {
            info,
            installed_at,
            trial_period,
        }
    }

    pub fn info(&self) -> &SoftwareInfo {
        &self.info
    }

    pub fn installed_at(&self) -> DateTime<Utc> {
        self.installed_at
    }

    pub fn trial_period(&self) -> Duration {
        self.trial_period
    }

    pub fn validate(&self) -> Result<()> {
        non_negative_period("trial_period", self.trial_period)
    }

    /// Ends the owner's hold on the trial installation.
    pub fn release(self) {
        info!(name = self.info.name(), "releasing trial software");
    }
}

impl UsabilityEvaluable for ConditionalFreeSoftware {
    fn expires_at(&self) -> Option<DateTime<Utc>> {
        window_end(self.installed_at, self.trial_period)
    }
}

impl Displayable for ConditionalFreeSoftware {
    fn shared_fields(&self) -> Vec<Field> {
        self.info.fields()
    }

    fn extra_fields(&self) -> Vec<Field> {
        vec![
            Field::date("Installation Date", self.installed_at),
            Field::period("Trial Period", self.trial_period),
        ]
    }
}

/// Price, installation instant and licensed usage length for
/// [`CommercialSoftware`].
#[derive(Debug, Clone, Default)]
pub struct CommercialTerms {
    pub price: Option<Decimal>,
    pub installed_at: Option<DateTime<Utc>>,
    pub usage_period: Option<Duration>,
}

/// Display keys accepted by [`CommercialSoftware::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKey {
    /// `"N"`: name and manufacturer.
    Name,
    /// `"P"`: price as currency.
    Price,
}

impl FromStr for FormatKey {
    type Err = RecordError;

    fn from_str(key: &str) -> Result<Self> {
        match key {
            "N" => Ok(FormatKey::Name),
            "P" => Ok(FormatKey::Price),
            other => Err(RecordError::InvalidFormatRequest(other.to_string())),
        }
    }
}

/// Paid software usable for a licensed period after installation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommercialSoftware {
    info: SoftwareInfo,
    price: Decimal,
    installed_at: DateTime<Utc>,
    #[serde(with = "crate::utils::serde_duration")]
    usage_period: Duration,
}

impl CommercialSoftware {
    pub fn new(
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        price: Decimal,
        installed_at: DateTime<Utc>,
        usage_period: Duration,
    ) -> Self {
        Self::build(
            SoftwareFields::new(name, manufacturer),
            CommercialTerms {
                price: Some(price),
                installed_at: Some(installed_at),
                usage_period: Some(usage_period),
            },
            &SystemClock,
        )
    }

    /// Entry with default identity, installed now, with the default usage period.
    pub fn with_price(price: Decimal) -> Self {
        Self::build(
            SoftwareFields::default(),
            CommercialTerms {
                price: Some(price),
                ..CommercialTerms::default()
            },
            &SystemClock,
        )
    }

    pub fn build(fields: SoftwareFields, terms: CommercialTerms, clock: &dyn Clock) -> Self {
        let info = fields.resolve();
        let price = terms.price.unwrap_or_default();
        let installed_at = terms.installed_at.unwrap_or_else(|| clock.now());
        let usage_period = terms
            .usage_period
            .unwrap_or_else(|| Duration::days(DEFAULT_USAGE_PERIOD_DAYS));
        debug!(
            name = info.name(),
            %price,
            %installed_at,
            usage_days = usage_period.num_days(),
            "commercial software constructed"
        );
        Self {
            info,
            price,
            installed_at,
            usage_period,
        }
    }

    pub fn info(&self) -> &SoftwareInfo {
        &self.info
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn installed_at(&self) -> DateTime<Utc> {
        self.installed_at
    }

    pub fn usage_period(&self) -> Duration {
        self.usage_period
    }

    /// Formats the entry for a display key; unknown keys are rejected.
    pub fn format(&self, key: &str, presenter: &Presenter) -> Result<String> {
        Ok(match key.parse::<FormatKey>()? {
            FormatKey::Name => format!("{} - {}", self.info.name, self.info.manufacturer),
            FormatKey::Price => presenter.format_money(self.price),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.price < Decimal::ZERO {
            return Err(RecordError::invalid_field(
                "price",
                format!("must not be negative, got {}", self.price),
            ));
        }
        non_negative_period("usage_period", self.usage_period)
    }
}

impl UsabilityEvaluable for CommercialSoftware {
    fn expires_at(&self) -> Option<DateTime<Utc>> {
        window_end(self.installed_at, self.usage_period)
    }
}

impl Displayable for CommercialSoftware {
    fn shared_fields(&self) -> Vec<Field> {
        self.info.fields()
    }

    fn extra_fields(&self) -> Vec<Field> {
        vec![
            Field::money("Price", self.price),
            Field::date("Installation Date", self.installed_at),
            Field::period("Usage Period", self.usage_period),
        ]
    }
}

/// A software entry of exactly one license variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Software {
    Free(FreeSoftware),
    ConditionalFree(ConditionalFreeSoftware),
    Commercial(CommercialSoftware),
}

impl Software {
    pub fn info(&self) -> &SoftwareInfo {
        match self {
            Software::Free(free) => free.info(),
            Software::ConditionalFree(trial) => trial.info(),
            Software::Commercial(commercial) => commercial.info(),
        }
    }

    pub fn kind(&self) -> SoftwareKind {
        match self {
            Software::Free(_) => SoftwareKind::Free,
            Software::ConditionalFree(_) => SoftwareKind::ConditionalFree,
            Software::Commercial(_) => SoftwareKind::Commercial,
        }
    }

    pub fn as_free(&self) -> Option<&FreeSoftware> {
        match self {
            Software::Free(free) => Some(free),
            _ => None,
        }
    }

    /// Orders two entries by name. Only free software is comparable.
    pub fn compare(&self, other: &Software) -> Result<Ordering> {
        match (self.as_free(), other.as_free()) {
            (Some(left), Some(right)) => Ok(left.cmp(right)),
            _ => Err(RecordError::InvalidComparisonOperand {
                left: self.kind().label(),
                right: other.kind().label(),
            }),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Software::Free(_) => Ok(()),
            Software::ConditionalFree(trial) => trial.validate(),
            Software::Commercial(commercial) => commercial.validate(),
        }
    }

    fn as_displayable(&self) -> &dyn Displayable {
        match self {
            Software::Free(free) => free,
            Software::ConditionalFree(trial) => trial,
            Software::Commercial(commercial) => commercial,
        }
    }
}

impl NamedEntity for Software {
    fn name(&self) -> &str {
        self.info().name()
    }
}

impl UsabilityEvaluable for Software {
    fn expires_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Software::Free(free) => free.expires_at(),
            Software::ConditionalFree(trial) => trial.expires_at(),
            Software::Commercial(commercial) => commercial.expires_at(),
        }
    }
}

impl Displayable for Software {
    fn shared_fields(&self) -> Vec<Field> {
        self.as_displayable().shared_fields()
    }

    fn extra_fields(&self) -> Vec<Field> {
        self.as_displayable().extra_fields()
    }
}

impl From<FreeSoftware> for Software {
    fn from(free: FreeSoftware) -> Self {
        Software::Free(free)
    }
}

impl From<ConditionalFreeSoftware> for Software {
    fn from(trial: ConditionalFreeSoftware) -> Self {
        Software::ConditionalFree(trial)
    }
}

impl From<CommercialSoftware> for Software {
    fn from(commercial: CommercialSoftware) -> Self {
        Software::Commercial(commercial)
    }
}

fn non_negative_period(field: &'static str, period: Duration) -> Result<()> {
    if period < Duration::zero() {
        return Err(RecordError::invalid_field(
            field,
            format!("must not be negative, got {} days", period.num_days()),
        ));
    }
    Ok(())
}
