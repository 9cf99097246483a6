use std::sync::Arc;

use tracing::{error, info};

use crate::core::traits::{RateKind, RateRecord};
use crate::core::{AppError, Result};
use crate::modules::rates::models::{
    applies_globally, ParentRate, RateAssignment, RateDraft, RatePatch, TutorRate,
};
use crate::modules::rates::repositories::BackendClient;

use super::catalog_cache::{CatalogCache, CatalogSlot, Mutation};

/// Read and write access to the tutor and parent rate catalogs.
///
/// Lists always return every rate, active or not. Writes go straight to the
/// backend and, once confirmed, invalidate the affected cached collections.
/// A 2xx with an unreadable body or a 404 invalidates them as well.
#[derive(Clone)]
pub struct RateCatalogService {
    backend: BackendClient,
    cache: Arc<CatalogCache>,
}

impl RateCatalogService {
    pub fn new(backend: BackendClient, cache: Arc<CatalogCache>) -> Self {
        Self { backend, cache }
    }

    pub async fn list_tutor_rates(&self) -> Result<Arc<Vec<TutorRate>>> {
        self.list(&self.cache.tutor_rates).await
    }

    pub async fn list_parent_rates(&self) -> Result<Arc<Vec<ParentRate>>> {
        self.list(&self.cache.parent_rates).await
    }

    pub async fn create_tutor_rate(&self, draft: RateDraft) -> Result<TutorRate> {
        self.create(draft).await
    }

    pub async fn create_parent_rate(&self, draft: RateDraft) -> Result<ParentRate> {
        self.create(draft).await
    }

    pub async fn update_tutor_rate(&self, id: &str, patch: RatePatch) -> Result<TutorRate> {
        self.update(id, patch).await
    }

    pub async fn update_parent_rate(&self, id: &str, patch: RatePatch) -> Result<ParentRate> {
        self.update(id, patch).await
    }

    /// Links pointing at the rate are left in place and become orphans
    pub async fn delete_tutor_rate(&self, id: &str) -> Result<()> {
        self.delete(RateKind::Tutor, id).await
    }

    pub async fn delete_parent_rate(&self, id: &str) -> Result<()> {
        self.delete(RateKind::Parent, id).await
    }

    /// Tutors and groups a tutor rate is scoped to, fetched on demand
    pub async fn list_tutor_rate_assignments(&self, rate_id: &str) -> Result<Vec<RateAssignment>> {
        let rate_id = require_id(rate_id, RateKind::Tutor)?;
        let assignments = self.backend.list_tutor_rate_assignments(rate_id).await?;
        info!(
            rate_id,
            count = assignments.len(),
            global = applies_globally(&assignments),
            "Fetched tutor rate assignments"
        );
        Ok(assignments)
    }

    async fn list<R: RateRecord>(&self, slot: &CatalogSlot<R>) -> Result<Arc<Vec<R>>> {
        slot.get_or_fetch(|| async {
            let rates = self.backend.list_rates::<R>().await?;
            info!(kind = R::KIND.label(), count = rates.len(), "Fetched rate catalog");
            Ok(rates)
        })
        .await
    }

    async fn create<R: RateRecord>(&self, draft: RateDraft) -> Result<R> {
        draft.validate()?;

        match self.backend.create_rate::<R>(&draft).await {
            Ok(rate) => {
                self.cache.apply(Mutation::CreateRate(R::KIND)).await;
                info!(
                    kind = R::KIND.label(),
                    id = rate.id(),
                    name = rate.name(),
                    amount = %rate.rate(),
                    "Rate created"
                );
                Ok(rate)
            }
            Err(e) => {
                self.cache
                    .apply_after_failure(Mutation::CreateRate(R::KIND), &e)
                    .await;
                error!(kind = R::KIND.label(), error = %e, "Failed to create rate");
                Err(e)
            }
        }
    }

    async fn update<R: RateRecord>(&self, id: &str, patch: RatePatch) -> Result<R> {
        let id = require_id(id, R::KIND)?;
        patch.validate()?;

        match self.backend.update_rate::<R>(id, &patch).await {
            Ok(rate) => {
                self.cache.apply(Mutation::UpdateRate(R::KIND)).await;
                info!(kind = R::KIND.label(), id, "Rate updated");
                Ok(rate)
            }
            Err(e) => {
                self.cache
                    .apply_after_failure(Mutation::UpdateRate(R::KIND), &e)
                    .await;
                error!(kind = R::KIND.label(), id, error = %e, "Failed to update rate");
                Err(e)
            }
        }
    }

    async fn delete(&self, kind: RateKind, id: &str) -> Result<()> {
        let id = require_id(id, kind)?;

        match self.backend.delete_rate(kind, id).await {
            Ok(()) => {
                self.cache.apply(Mutation::DeleteRate(kind)).await;
                info!(kind = kind.label(), id, "Rate deleted");
                Ok(())
            }
            Err(e) => {
                self.cache
                    .apply_after_failure(Mutation::DeleteRate(kind), &e)
                    .await;
                error!(kind = kind.label(), id, error = %e, "Failed to delete rate");
                Err(e)
            }
        }
    }
}

fn require_id(id: &str, kind: RateKind) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::validation(format!("Select a {}", kind.label())));
    }
    Ok(id)
}
