use chrono::Utc;
use tracing::{info, warn};

use crate::core::Result;
use crate::modules::rates::services::{RateCatalogService, RateLinkService};
use crate::modules::reports::models::ProfitReport;

use super::ProfitCalculator;

/// Builds the profit report from the current catalogs and link set
#[derive(Clone)]
pub struct ReportService {
    catalog: RateCatalogService,
    links: RateLinkService,
}

impl ReportService {
    pub fn new(catalog: RateCatalogService, links: RateLinkService) -> Self {
        Self { catalog, links }
    }

    /// Nothing is persisted; the report is recomputed from cached or
    /// freshly fetched collections on every call.
    pub async fn generate_profit_report(&self) -> Result<ProfitReport> {
        let (tutor_rates, parent_rates, links) = tokio::try_join!(
            self.catalog.list_tutor_rates(),
            self.catalog.list_parent_rates(),
            self.links.list_links(),
        )?;

        let (entries, summary) =
            ProfitCalculator::new().calculate(&tutor_rates, &parent_rates, &links);

        let report = ProfitReport {
            entries,
            summary,
            generated_at: Utc::now(),
        };

        if report.is_empty() {
            warn!(links = links.len(), "Profit report has no entries");
        } else {
            info!(
                entries = report.entries.len(),
                losses = report.entries.iter().filter(|e| e.is_loss()).count(),
                avg_margin = %report.summary.avg_margin_display,
                "Profit report generated"
            );
        }

        Ok(report)
    }
}
