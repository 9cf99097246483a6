use serde::{Deserialize, Serialize};

/// Scopes a tutor rate to one tutor or one tutor group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateAssignment {
    pub id: String,
    pub tutor_rate_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tutor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tutor_group_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentScope<'a> {
    Tutor(&'a str),
    TutorGroup(&'a str),
    Unscoped,
}

impl RateAssignment {
    /// A tutor id wins over a group id when a record carries both
    pub fn scope(&self) -> AssignmentScope<'_> {
        match (&self.tutor_id, &self.tutor_group_id) {
            (Some(tutor), _) => AssignmentScope::Tutor(tutor),
            (None, Some(group)) => AssignmentScope::TutorGroup(group),
            (None, None) => AssignmentScope::Unscoped,
        }
    }
}

/// True when a rate with these assignments applies to every tutor
pub fn applies_globally(assignments: &[RateAssignment]) -> bool {
    assignments
        .iter()
        .all(|a| a.scope() == AssignmentScope::Unscoped)
}
