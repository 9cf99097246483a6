use reqwest::{Client, Method, Url};
use serde::{de::DeserializeOwned, Serialize};

use crate::config::BackendConfig;
use crate::core::traits::{RateKind, RateRecord};
use crate::core::{AppError, Result};
use crate::modules::rates::models::{
    CreateRateLinkRequest, RateAssignment, RateDraft, RateLink, RatePatch,
};

const RATE_LINKS: &str = "rate-links";
const ASSIGNMENTS: &str = "assignments";

/// JSON/HTTP client for the rates backend, the single source of truth for
/// both catalogs and the link set.
///
/// No retries: a failed call is reported once and the caller decides.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: Url,
    api_token: Option<String>,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            AppError::Configuration(format!("Invalid backend URL '{}': {}", config.base_url, e))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(AppError::Configuration(format!(
                "Backend URL '{}' cannot carry paths",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(AppError::HttpClient)?;

        Ok(Self {
            client,
            base_url,
            api_token: config.api_token.clone(),
        })
    }

    pub async fn list_rates<R: RateRecord>(&self) -> Result<Vec<R>> {
        self.request(Method::GET, &[R::KIND.segment()], None::<&()>)
            .await
    }

    pub async fn create_rate<R: RateRecord>(&self, draft: &RateDraft) -> Result<R> {
        self.request(Method::POST, &[R::KIND.segment()], Some(draft))
            .await
    }

    pub async fn update_rate<R: RateRecord>(&self, id: &str, patch: &RatePatch) -> Result<R> {
        self.request(Method::PATCH, &[R::KIND.segment(), id], Some(patch))
            .await
    }

    pub async fn delete_rate(&self, kind: RateKind, id: &str) -> Result<()> {
        self.send(Method::DELETE, &[kind.segment(), id], None::<&()>)
            .await
            .map(|_| ())
    }

    pub async fn list_links(&self) -> Result<Vec<RateLink>> {
        self.request(Method::GET, &[RATE_LINKS], None::<&()>).await
    }

    pub async fn create_link(&self, body: &CreateRateLinkRequest) -> Result<RateLink> {
        self.request(Method::POST, &[RATE_LINKS], Some(body)).await
    }

    pub async fn delete_link(&self, id: &str) -> Result<()> {
        self.send(Method::DELETE, &[RATE_LINKS, id], None::<&()>)
            .await
            .map(|_| ())
    }

    pub async fn list_tutor_rate_assignments(&self, rate_id: &str) -> Result<Vec<RateAssignment>> {
        self.request(
            Method::GET,
            &[RateKind::Tutor.segment(), rate_id, ASSIGNMENTS],
            None::<&()>,
        )
        .await
    }

    /// Builds `base_url/segment/...`, percent-encoding every segment
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::internal("Backend URL cannot carry paths"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn request<B, T>(&self, method: Method, segments: &[&str], body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let context = format!("{} /{}", method, segments.join("/"));
        let response_body = self.send(method, segments, body).await?;

        serde_json::from_str(&response_body).map_err(|e| {
            tracing::error!(request = %context, error = %e, "Failed to parse backend response");
            AppError::UnreadableResponse(format!("{}: {}", context, e))
        })
    }

    async fn send<B>(&self, method: Method, segments: &[&str], body: Option<&B>) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(segments)?;
        let context = format!("{} {}", method, url.path());

        tracing::debug!(request = %context, "Calling rates backend");

        let mut builder = self
            .client
            .request(method, url)
            .header("Accept", "application/json");

        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                let reason = if e.is_timeout() {
                    "timeout"
                } else {
                    "connection failed"
                };
                tracing::error!(request = %context, reason, "Rates backend unavailable");
            } else {
                tracing::error!(request = %context, error = %e, "Rates backend request failed");
            }
            AppError::HttpClient(e)
        })?;

        let status = response.status();
        let body = response.text().await;

        if !status.is_success() {
            tracing::warn!(
                request = %context,
                status = %status,
                "Rates backend returned an error"
            );
            let body = body.unwrap_or_default();
            return Err(AppError::from_status(status, &context, &body));
        }

        // Status already confirms the write
        body.map_err(|e| {
            tracing::error!(request = %context, error = %e, "Failed to read backend response");
            AppError::UnreadableResponse(format!("{}: {}", context, e))
        })
    }
}
