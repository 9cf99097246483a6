use serde::{Deserialize, Serialize};

use super::{ParentRate, TutorRate};

/// Reporting-only association between one tutor rate and one parent rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLink {
    pub id: String,
    pub tutor_rate_id: String,
    pub parent_rate_id: String,
    /// Pre-joined copy some backends embed; never used for calculations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tutor_rate: Option<TutorRate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_rate: Option<ParentRate>,
}

impl RateLink {
    pub fn new(
        id: impl Into<String>,
        tutor_rate_id: impl Into<String>,
        parent_rate_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            tutor_rate_id: tutor_rate_id.into(),
            parent_rate_id: parent_rate_id.into(),
            tutor_rate: None,
            parent_rate: None,
        }
    }
}

/// Body of `POST /rate-links`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRateLinkRequest {
    pub tutor_rate_id: String,
    pub parent_rate_id: String,
}
