pub mod rate_record;

pub use rate_record::{RateKind, RateRecord};
