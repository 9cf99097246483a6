use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::core::money;
use crate::modules::rates::models::{ParentRate, RateLink, TutorRate};
use crate::modules::reports::models::{ProfitEntry, ProfitSummary};

/// Derives per-link profit and margin from the two rate catalogs and the
/// link set. Pure: no I/O, inputs are never modified.
pub struct ProfitCalculator;

impl ProfitCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Entries in link order plus the aggregate over them.
    ///
    /// Links whose tutor or parent rate no longer exists are skipped
    /// silently and count toward neither.
    pub fn calculate(
        &self,
        tutor_rates: &[TutorRate],
        parent_rates: &[ParentRate],
        links: &[RateLink],
    ) -> (Vec<ProfitEntry>, ProfitSummary) {
        let tutors: HashMap<&str, &TutorRate> =
            tutor_rates.iter().map(|r| (r.id.as_str(), r)).collect();
        let parents: HashMap<&str, &ParentRate> =
            parent_rates.iter().map(|r| (r.id.as_str(), r)).collect();

        let entries: Vec<ProfitEntry> = links
            .iter()
            .filter_map(|link| {
                let tutor = tutors.get(link.tutor_rate_id.as_str())?;
                let parent = parents.get(link.parent_rate_id.as_str())?;
                Some(self.entry(link, tutor, parent))
            })
            .collect();

        let skipped = links.len() - entries.len();
        if skipped > 0 {
            tracing::debug!(skipped, "Skipped rate links with deleted rates");
        }

        let summary = self.summarize(&entries);
        (entries, summary)
    }

    pub fn entry(&self, link: &RateLink, tutor: &TutorRate, parent: &ParentRate) -> ProfitEntry {
        let tutor_amount = tutor.rate;
        let parent_amount = parent.rate;
        let profit = money::difference(parent_amount, tutor_amount);
        let margin_percent = money::percent_of(profit, parent_amount);

        ProfitEntry {
            link_id: link.id.clone(),
            tutor_rate_id: tutor.id.clone(),
            tutor_rate_name: tutor.name.clone(),
            parent_rate_id: parent.id.clone(),
            parent_rate_name: parent.name.clone(),
            tutor_amount,
            parent_amount,
            profit,
            margin_percent,
            margin_display: money::format_percent(margin_percent),
        }
    }

    pub fn summarize(&self, entries: &[ProfitEntry]) -> ProfitSummary {
        if entries.is_empty() {
            return ProfitSummary::empty();
        }

        let tutor_amounts: Vec<Decimal> = entries.iter().map(|e| e.tutor_amount).collect();
        let parent_amounts: Vec<Decimal> = entries.iter().map(|e| e.parent_amount).collect();

        let avg_tutor_rate = money::mean(&tutor_amounts);
        let avg_parent_rate = money::mean(&parent_amounts);
        let avg_profit = money::difference(avg_parent_rate, avg_tutor_rate);
        let avg_margin_percent = money::percent_of(avg_profit, avg_parent_rate);

        ProfitSummary {
            count: entries.len(),
            avg_tutor_rate,
            avg_parent_rate,
            avg_profit,
            avg_margin_percent,
            avg_margin_display: money::format_percent(avg_margin_percent),
        }
    }
}

impl Default for ProfitCalculator {
    fn default() -> Self {
        Self::new()
    }
}
