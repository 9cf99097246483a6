//! Client-side cache of the three backend collections.
//!
//! Each collection is held as an immutable snapshot and replaced wholesale.
//! Mutations never touch snapshots; they declare which collections they
//! invalidate, and the next read of an invalidated collection refetches.
//! Snapshots also expire after a fixed age, so writes made by other
//! instances or tools show up without a local mutation.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::core::traits::RateKind;
use crate::core::{AppError, Result};
use crate::modules::rates::models::{ParentRate, RateLink, TutorRate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    TutorRates,
    ParentRates,
    RateLinks,
}

/// Every write the dashboard can send to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    CreateRate(RateKind),
    UpdateRate(RateKind),
    DeleteRate(RateKind),
    CreateLink,
    DeleteLink,
}

impl Mutation {
    /// Collections that must be refetched once this mutation succeeds.
    /// Rate writes also invalidate links: a deleted rate orphans links and
    /// pre-joined link payloads carry rate copies.
    pub fn invalidates(&self) -> &'static [Collection] {
        match self {
            Mutation::CreateRate(RateKind::Tutor)
            | Mutation::UpdateRate(RateKind::Tutor)
            | Mutation::DeleteRate(RateKind::Tutor) => {
                &[Collection::TutorRates, Collection::RateLinks]
            }
            Mutation::CreateRate(RateKind::Parent)
            | Mutation::UpdateRate(RateKind::Parent)
            | Mutation::DeleteRate(RateKind::Parent) => {
                &[Collection::ParentRates, Collection::RateLinks]
            }
            Mutation::CreateLink | Mutation::DeleteLink => &[Collection::RateLinks],
        }
    }
}

struct SlotState<T> {
    snapshot: Option<Arc<Vec<T>>>,
    fetched_at: Option<Instant>,
    /// Bumped on every invalidation so a fetch that started before it
    /// cannot repopulate the slot with stale data
    generation: u64,
}

/// One cached collection
pub struct CatalogSlot<T> {
    collection: Collection,
    ttl: Duration,
    state: RwLock<SlotState<T>>,
}

impl<T> CatalogSlot<T> {
    fn new(collection: Collection, ttl: Duration) -> Self {
        Self {
            collection,
            ttl,
            state: RwLock::new(SlotState {
                snapshot: None,
                fetched_at: None,
                generation: 0,
            }),
        }
    }

    fn is_fresh(&self, state: &SlotState<T>) -> bool {
        state.snapshot.is_some()
            && state
                .fetched_at
                .is_some_and(|fetched_at| fetched_at.elapsed() < self.ttl)
    }

    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> Result<Arc<Vec<T>>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        let generation = {
            let state = self.state.read().await;
            if self.is_fresh(&state) {
                if let Some(snapshot) = &state.snapshot {
                    return Ok(Arc::clone(snapshot));
                }
            }
            state.generation
        };

        let fresh = Arc::new(fetch().await?);

        let mut state = self.state.write().await;
        if state.generation == generation {
            state.snapshot = Some(Arc::clone(&fresh));
            state.fetched_at = Some(Instant::now());
        } else {
            tracing::debug!(
                collection = ?self.collection,
                "Collection invalidated during fetch, not caching result"
            );
        }

        Ok(fresh)
    }

    pub async fn invalidate(&self) {
        let mut state = self.state.write().await;
        state.snapshot = None;
        state.fetched_at = None;
        state.generation += 1;
    }

    /// Holds a snapshot that is still within its age limit
    pub async fn is_cached(&self) -> bool {
        let state = self.state.read().await;
        self.is_fresh(&state)
    }
}

pub struct CatalogCache {
    pub tutor_rates: CatalogSlot<TutorRate>,
    pub parent_rates: CatalogSlot<ParentRate>,
    pub rate_links: CatalogSlot<RateLink>,
}

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30);

impl CatalogCache {
    /// `ttl` bounds how long a snapshot is served before it is refetched
    pub fn new(ttl: Duration) -> Self {
        Self {
            tutor_rates: CatalogSlot::new(Collection::TutorRates, ttl),
            parent_rates: CatalogSlot::new(Collection::ParentRates, ttl),
            rate_links: CatalogSlot::new(Collection::RateLinks, ttl),
        }
    }

    pub async fn invalidate(&self, collection: Collection) {
        match collection {
            Collection::TutorRates => self.tutor_rates.invalidate().await,
            Collection::ParentRates => self.parent_rates.invalidate().await,
            Collection::RateLinks => self.rate_links.invalidate().await,
        }
    }

    /// Applies the invalidation contract of a mutation that succeeded
    pub async fn apply(&self, mutation: Mutation) {
        for collection in mutation.invalidates() {
            self.invalidate(*collection).await;
        }
        tracing::debug!(
            mutation = ?mutation,
            invalidated = ?mutation.invalidates(),
            "Cache invalidated"
        );
    }

    /// Applies the contract of a failed mutation when the backend may already
    /// differ from the cache, leaving it untouched otherwise
    pub async fn apply_after_failure(&self, mutation: Mutation, err: &AppError) {
        if err.leaves_cache_stale() {
            self.apply(mutation).await;
        }
    }

    pub async fn is_cached(&self, collection: Collection) -> bool {
        match collection {
            Collection::TutorRates => self.tutor_rates.is_cached().await,
            Collection::ParentRates => self.parent_rates.is_cached().await,
            Collection::RateLinks => self.rate_links.is_cached().await,
        }
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}
