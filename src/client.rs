//! High-level client — `LookupClient` with per-category sub-client accessors.
//!
//! The sub-client lives in `domain/record/client.rs`. This module keeps the
//! builder, URL construction and the fetch → validate → map pipeline.

use crate::config::Config;
use crate::domain::record::client::Lookup;
use crate::domain::record::DisplayResult;
use crate::error::LookupError;
use crate::http::{LookupHttp, RetryPolicy};
use crate::shared::{normalize_name, Category, Endpoint, RouteLayout};

use std::time::Duration;

pub use crate::domain::record::client::Lookup as LookupSubClient;

/// The primary entry point: one client serves every category.
#[derive(Clone)]
pub struct LookupClient {
    pub(crate) http: LookupHttp,
    pub(crate) route_layout: RouteLayout,
    pub(crate) placeholder_image: String,
    pub(crate) retry_policy: RetryPolicy,
}

impl LookupClient {
    pub fn builder() -> LookupClientBuilder {
        LookupClientBuilder::default()
    }

    pub fn from_config(config: &Config) -> Result<Self, LookupError> {
        let mut builder = Self::builder()
            .base_url(&config.api_url)
            .route_layout(config.route_layout)
            .placeholder_image(&config.placeholder_image);
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn lookup(&self, category: Category) -> Lookup<'_> {
        Lookup {
            client: self,
            category,
        }
    }

    pub fn characters(&self) -> Lookup<'_> {
        self.lookup(Category::Character)
    }

    pub fn breathings(&self) -> Lookup<'_> {
        self.lookup(Category::BreathingStyle)
    }

    pub fn demons(&self) -> Lookup<'_> {
        self.lookup(Category::Demon)
    }

    // ── Pipeline ─────────────────────────────────────────────────────────

    pub fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }

    pub fn route_layout(&self) -> RouteLayout {
        self.route_layout
    }

    /// Explicit request timeout, if one was configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.http.timeout()
    }

    /// Full request URL for an endpoint in `category`.
    pub fn request_url(&self, category: Category, endpoint: &Endpoint) -> String {
        let segment = urlencoding::encode(endpoint.as_str());
        match self.route_layout {
            RouteLayout::PerCategory => format!(
                "{}/{}/{}",
                self.http.base_url(),
                category.path_segment(),
                segment
            ),
            RouteLayout::Flat => format!("{}/{}", self.http.base_url(), segment),
        }
    }

    /// Fetch one record and map it to a display result.
    ///
    /// An empty endpoint fails with [`LookupError::EmptyInput`] before any
    /// request is issued.
    pub async fn fetch_and_display(
        &self,
        endpoint: &Endpoint,
        category: Category,
    ) -> Result<DisplayResult, LookupError> {
        if endpoint.is_empty() {
            return Err(LookupError::EmptyInput { category });
        }

        let url = self.request_url(category, endpoint);
        tracing::info!(%category, %endpoint, "Looking up {}", url);

        let body = self
            .http
            .get_record(&url, self.retry_policy.clone())
            .await
            .map_err(|e| LookupError::from_http(e, category))?;

        let record = body
            .into_record()
            .ok_or(LookupError::InvalidData { category })?;

        DisplayResult::try_from((record, self.placeholder_image.as_str())).map_err(|e| {
            tracing::warn!(%category, %endpoint, "Rejected record: {}", e);
            LookupError::InvalidData { category }
        })
    }

    /// Normalize a user-entered name, then [`fetch_and_display`](Self::fetch_and_display).
    pub async fn search(
        &self,
        raw_name: &str,
        category: Category,
    ) -> Result<DisplayResult, LookupError> {
        let endpoint = normalize_name(raw_name);
        self.fetch_and_display(&endpoint, category).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct LookupClientBuilder {
    base_url: String,
    route_layout: RouteLayout,
    placeholder_image: String,
    retry_policy: RetryPolicy,
    timeout: Option<Duration>,
}

impl Default for LookupClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            route_layout: RouteLayout::default(),
            placeholder_image: crate::network::PLACEHOLDER_IMAGE.to_string(),
            retry_policy: RetryPolicy::None,
            timeout: None,
        }
    }
}

impl LookupClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn route_layout(mut self, layout: RouteLayout) -> Self {
        self.route_layout = layout;
        self
    }

    pub fn placeholder_image(mut self, path: &str) -> Self {
        self.placeholder_image = path.to_string();
        self
    }

    /// Opt in to retries; lookups make a single attempt by default.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Bound each request; without it the transport defaults apply.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<LookupClient, LookupError> {
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| LookupError::Config(format!("invalid base URL {}: {}", self.base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(LookupError::Config(format!(
                "base URL must be http(s): {}",
                self.base_url
            )));
        }

        let http = LookupHttp::new(&self.base_url, self.timeout)
            .map_err(|e| LookupError::Config(e.to_string()))?;

        Ok(LookupClient {
            http,
            route_layout: self.route_layout,
            placeholder_image: self.placeholder_image,
            retry_policy: self.retry_policy,
        })
    }
}
