pub mod class_type;
pub mod parent_rate;
pub mod rate_assignment;
pub mod rate_draft;
pub mod rate_filter;
pub mod rate_link;
pub mod tutor_rate;

pub use class_type::ClassType;
pub use parent_rate::ParentRate;
pub use rate_assignment::{applies_globally, AssignmentScope, RateAssignment};
pub use rate_draft::{RateDraft, RatePatch};
pub use rate_filter::{default_rate, RateFilter};
pub use rate_link::{CreateRateLinkRequest, RateLink};
pub use tutor_rate::TutorRate;
