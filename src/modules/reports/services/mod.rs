pub mod profit_calculator;
pub mod report_service;

pub use profit_calculator::ProfitCalculator;
pub use report_service::ReportService;
