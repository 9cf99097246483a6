use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::ClassType;
use crate::core::{AppError, Result};

/// Fields for creating a tutor or parent rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub class_type: ClassType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(alias = "ratePerHour")]
    pub rate: Decimal,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl RateDraft {
    pub fn new(name: impl Into<String>, class_type: ClassType, rate: Decimal) -> Self {
        Self {
            name: name.into(),
            description: None,
            class_type,
            subject: None,
            rate,
            is_default: false,
            is_active: true,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_amount(self.rate)
    }
}

/// Partial update; absent fields are left untouched by the backend.
///
/// `description` and `subject` can also be cleared: `Some(None)` is sent as
/// an explicit `null`, which turns a subject-scoped rate into one that
/// applies to every subject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_type: Option<ClassType>,
    #[serde(default, deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub subject: Option<Option<String>>,
    #[serde(default, alias = "ratePerHour", skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl RatePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.class_type.is_none()
            && self.subject.is_none()
            && self.rate.is_none()
            && self.is_default.is_none()
            && self.is_active.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(AppError::validation("Nothing to update"));
        }
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(rate) = self.rate {
            validate_amount(rate)?;
        }
        Ok(())
    }
}

/// Present-but-null decodes to `Some(None)`; a missing field stays `None`
/// through `#[serde(default)]`
fn clearable<'de, D>(deserializer: D) -> std::result::Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Rate name is required"));
    }
    Ok(())
}

fn validate_amount(rate: Decimal) -> Result<()> {
    if rate < Decimal::ZERO {
        return Err(AppError::validation("Hourly rate cannot be negative"));
    }
    Ok(())
}
