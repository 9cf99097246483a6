use std::sync::Arc;

use tracing::{error, info};

use crate::core::{AppError, Result};
use crate::modules::rates::models::{CreateRateLinkRequest, RateLink};
use crate::modules::rates::repositories::BackendClient;

use super::catalog_cache::{CatalogCache, Mutation};

/// Creates and removes tutor/parent rate links.
///
/// Links are reporting-only: neither operation touches the linked rates,
/// so only the link collection is invalidated. There is no update; re-linking
/// is a delete followed by a create.
#[derive(Clone)]
pub struct RateLinkService {
    backend: BackendClient,
    cache: Arc<CatalogCache>,
}

impl RateLinkService {
    pub fn new(backend: BackendClient, cache: Arc<CatalogCache>) -> Self {
        Self { backend, cache }
    }

    pub async fn list_links(&self) -> Result<Arc<Vec<RateLink>>> {
        self.cache
            .rate_links
            .get_or_fetch(|| async {
                let links = self.backend.list_links().await?;
                info!(count = links.len(), "Fetched rate links");
                Ok(links)
            })
            .await
    }

    pub async fn create_link(&self, tutor_rate_id: &str, parent_rate_id: &str) -> Result<RateLink> {
        let request = CreateRateLinkRequest {
            tutor_rate_id: require(tutor_rate_id, "Select a tutor rate")?,
            parent_rate_id: require(parent_rate_id, "Select a parent rate")?,
        };

        match self.backend.create_link(&request).await {
            Ok(link) => {
                self.cache.apply(Mutation::CreateLink).await;
                info!(
                    link_id = %link.id,
                    tutor_rate_id = %link.tutor_rate_id,
                    parent_rate_id = %link.parent_rate_id,
                    "Rate link created"
                );
                Ok(link)
            }
            Err(e) => {
                self.cache.apply_after_failure(Mutation::CreateLink, &e).await;
                error!(
                    tutor_rate_id = %request.tutor_rate_id,
                    parent_rate_id = %request.parent_rate_id,
                    error = %e,
                    "Failed to create rate link"
                );
                Err(e)
            }
        }
    }

    pub async fn delete_link(&self, link_id: &str) -> Result<()> {
        let link_id = require(link_id, "Select a rate link")?;

        match self.backend.delete_link(&link_id).await {
            Ok(()) => {
                self.cache.apply(Mutation::DeleteLink).await;
                info!(link_id = %link_id, "Rate link deleted");
                Ok(())
            }
            Err(e) => {
                self.cache.apply_after_failure(Mutation::DeleteLink, &e).await;
                error!(link_id = %link_id, error = %e, "Failed to delete rate link");
                Err(e)
            }
        }
    }
}

fn require(id: &str, message: &str) -> Result<String> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::validation(message));
    }
    Ok(id.to_string())
}
