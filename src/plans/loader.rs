use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::error::{AppError, PlanLoadError};
use crate::metrics;
use crate::plans::cache::RevalidatingCache;
use crate::plans::models::{plans_from_records, Plan, PlansEnvelope};

/// Path of the plans listing, relative to the API base address
pub const PLANS_PATH: &str = "/api/planos";

/// What a call to [`PlanLoader::load_with_outcome`] actually did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Served from the revalidation cache, no request made
    Cached,
    /// Upstream returned at least one plan
    Fetched,
    /// Upstream answered successfully with zero plans
    Empty,
    /// Upstream could not be used; carries the failure reason label
    Unavailable(&'static str),
}

impl LoadOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cached => "cached",
            Self::Fetched => "fetched",
            Self::Empty => "empty",
            Self::Unavailable(_) => "unavailable",
        }
    }
}

/// Fetches pricing plans from the InkManage API.
///
/// Never fails its caller: every upstream problem turns into an empty list.
/// Successful responses (including an empty list) are reused for the
/// configured revalidation window; failures are not cached.
#[derive(Clone)]
pub struct PlanLoader {
    client: reqwest::Client,
    endpoint: Url,
    cache: RevalidatingCache<Vec<Plan>>,
}

impl PlanLoader {
    /// Create a loader with its own HTTP client
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Self::with_client(client, config)
    }

    /// Create a loader that reuses an existing HTTP client
    pub fn with_client(client: reqwest::Client, config: &ApiConfig) -> Result<Self, AppError> {
        let endpoint = plans_endpoint(&config.base_url)?;

        Ok(Self {
            client,
            endpoint,
            cache: RevalidatingCache::new(config.revalidate_window()),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// One uncached round trip to the plans API
    pub async fn fetch(&self) -> Result<Vec<Plan>, PlanLoadError> {
        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlanLoadError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let envelope: PlansEnvelope = serde_json::from_slice(&body)
            .map_err(|e| PlanLoadError::Decode(e.to_string()))?;

        Ok(plans_from_records(envelope.planos.unwrap_or_default()))
    }

    /// Plans for display plus what happened while getting them
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn load_with_outcome(&self) -> (Vec<Plan>, LoadOutcome) {
        if let Some(plans) = self.cache.get_fresh().await {
            debug!(count = plans.len(), "Serving plans from cache");
            metrics::record_plan_load(LoadOutcome::Cached.as_str(), None);
            return (plans, LoadOutcome::Cached);
        }

        let started = Instant::now();
        let result = self.fetch().await;
        metrics::record_plan_fetch_duration(started.elapsed());

        let (plans, outcome) = match result {
            Ok(plans) => {
                self.cache.store(plans.clone()).await;
                if plans.is_empty() {
                    info!("Plans API returned no plans");
                    (plans, LoadOutcome::Empty)
                } else {
                    info!(count = plans.len(), "Loaded plans from API");
                    (plans, LoadOutcome::Fetched)
                }
            }
            Err(err) => {
                warn!(reason = err.reason(), error = %err, "Plans API unavailable");
                (Vec::new(), LoadOutcome::Unavailable(err.reason()))
            }
        };

        let reason = match outcome {
            LoadOutcome::Unavailable(reason) => Some(reason),
            _ => None,
        };
        metrics::record_plan_load(outcome.as_str(), reason);

        (plans, outcome)
    }

    /// Plans for display, possibly empty
    pub async fn load(&self) -> Vec<Plan> {
        self.load_with_outcome().await.0
    }

    /// Forget the cached response so the next load hits the API
    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }
}

fn plans_endpoint(base_url: &str) -> Result<Url, AppError> {
    let raw = format!("{}{}", base_url.trim_end_matches('/'), PLANS_PATH);
    Url::parse(&raw)
        .map_err(|e| AppError::ConfigError(format!("Invalid plans API base URL '{}': {}", base_url, e)))
}
