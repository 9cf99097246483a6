use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ClassType;
use crate::core::traits::{RateKind, RateRecord};

fn default_active() -> bool {
    true
}

/// Hourly amount billed to parents for a session type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentRate {
    pub id: String,
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

impl RateRecord for ParentRate {
    const KIND: RateKind = RateKind::Parent;

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
