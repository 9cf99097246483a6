use serde::Deserialize;

use super::ClassType;
use crate::core::traits::RateRecord;

/// Display filter over a rate catalog. Filtering never happens upstream:
/// catalogs are always fetched whole, active and inactive alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateFilter {
    #[serde(default)]
    pub active_only: bool,
    #[serde(default)]
    pub class_type: Option<ClassType>,
    #[serde(default)]
    pub subject: Option<String>,
}

impl RateFilter {
    pub fn matches<R: RateRecord>(&self, rate: &R) -> bool {
        if self.active_only && !rate.is_active() {
            return false;
        }
        if let Some(class_type) = self.class_type {
            if rate.class_type() != class_type {
                return false;
            }
        }
        match (&self.subject, rate.subject()) {
            (Some(wanted), Some(subject)) => wanted.eq_ignore_ascii_case(subject),
            (Some(_), None) => true,
            (None, _) => true,
        }
    }

    pub fn apply<R: RateRecord>(&self, rates: &[R]) -> Vec<R> {
        rates.iter().filter(|r| self.matches(*r)).cloned().collect()
    }
}

/// Picks the active default rate for a class type. A subject-specific
/// default wins over a subject-less one.
pub fn default_rate<'a, R: RateRecord>(
    rates: &'a [R],
    class_type: ClassType,
    subject: Option<&str>,
) -> Option<&'a R> {
    let candidates: Vec<&'a R> = rates
        .iter()
        .filter(|r| r.is_active() && r.is_default() && r.class_type() == class_type)
        .collect();

    if let Some(subject) = subject {
        if let Some(rate) = candidates
            .iter()
            .find(|r| r.subject().is_some_and(|s| s.eq_ignore_ascii_case(subject)))
        {
            return Some(*rate);
        }
    }

    candidates.into_iter().find(|r| r.subject().is_none())
}
