use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ClassType;
use crate::core::traits::{RateKind, RateRecord};

fn default_active() -> bool {
    true
}

/// Hourly amount payable to tutors for a session type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorRate {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub class_type: ClassType,
    /// `None` applies to every subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Some backend paths still send the amount as `ratePerHour`
    #[serde(alias = "ratePerHour")]
    pub rate: Decimal,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl RateRecord for TutorRate {
    const KIND: RateKind = RateKind::Tutor;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn class_type(&self) -> ClassType {
        self.class_type
    }

    fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    fn rate(&self) -> Decimal {
        self.rate
    }

    fn is_default(&self) -> bool {
        self.is_default
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
