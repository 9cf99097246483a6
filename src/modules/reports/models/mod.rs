pub mod profit_report;

pub use profit_report::{ProfitEntry, ProfitReport, ProfitSummary};
