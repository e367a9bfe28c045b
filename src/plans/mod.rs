pub mod cache;
pub mod fallback;
pub mod loader;
pub mod models;

pub use cache::RevalidatingCache;
pub use fallback::fallback_plans;
pub use loader::{LoadOutcome, PlanLoader, PLANS_PATH};
pub use models::{Limit, Plan, PlanRecord, PlansEnvelope};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

/// Where the plans on a rendered page came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    Live,
    Fallback,
}

/// Plans ready to be displayed, never empty
#[derive(Debug, Clone, Serialize)]
pub struct PlanCatalog {
    pub source: CatalogSource,
    pub plans: Vec<Plan>,
    #[serde(skip)]
    pub outcome: Option<LoadOutcome>,
    pub resolved_at: DateTime<Utc>,
}

impl PlanCatalog {
    /// Live plans, or the static fallback set when there are none
    pub fn from_loaded(plans: Vec<Plan>, outcome: Option<LoadOutcome>) -> Self {
        if plans.is_empty() {
            Self {
                source: CatalogSource::Fallback,
                plans: fallback_plans(),
                outcome,
                resolved_at: Utc::now(),
            }
        } else {
            Self {
                source: CatalogSource::Live,
                plans,
                outcome,
                resolved_at: Utc::now(),
            }
        }
    }
}

/// Load plans and substitute the fallback set if the loader came back empty
pub async fn resolve_catalog(loader: &PlanLoader) -> PlanCatalog {
    let (plans, outcome) = loader.load_with_outcome().await;
    let catalog = PlanCatalog::from_loaded(plans, Some(outcome));

    if catalog.source == CatalogSource::Fallback {
        info!(outcome = outcome.as_str(), "Rendering fallback plans");
        crate::metrics::record_fallback(outcome.as_str());
    }

    catalog
}
