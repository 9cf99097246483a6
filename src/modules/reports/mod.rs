pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{ProfitEntry, ProfitReport, ProfitSummary};
pub use services::{ProfitCalculator, ReportService};
