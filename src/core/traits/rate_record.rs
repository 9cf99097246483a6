use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Serialize};

use crate::modules::rates::models::ClassType;

/// Which catalog a rate belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateKind {
    /// Paid to tutors
    Tutor,
    /// Billed to parents
    Parent,
}

impl RateKind {
    /// Collection path segment on the backend
    pub fn segment(&self) -> &'static str {
        match self {
            RateKind::Tutor => "tutor-rates",
            RateKind::Parent => "parent-rates",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RateKind::Tutor => "tutor rate",
            RateKind::Parent => "parent rate",
        }
    }
}

/// Common shape of the tutor and parent rate catalogs
pub trait RateRecord: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    const KIND: RateKind;

    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn class_type(&self) -> ClassType;
    fn subject(&self) -> Option<&str>;
    fn rate(&self) -> Decimal;
    fn is_default(&self) -> bool;
    fn is_active(&self) -> bool;
}
