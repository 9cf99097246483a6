use serde::{Deserialize, Serialize};
use std::fmt;

/// Session format a rate applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassType {
    Individual,
    Group,
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassType::Individual => write!(f, "individual"),
            ClassType::Group => write!(f, "group"),
        }
    }
}

impl std::str::FromStr for ClassType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "individual" => Ok(ClassType::Individual),
            "group" => Ok(ClassType::Group),
            _ => Err(format!("Invalid class type: {}", s)),
        }
    }
}
