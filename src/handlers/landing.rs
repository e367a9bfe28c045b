use axum::{extract::State, response::Html};

use crate::handlers::AppState;
use crate::metrics;
use crate::plans::{resolve_catalog, CatalogSource};
use crate::views::{cards_for, render_landing_page, LandingPage};

pub const PRODUCT_NAME: &str = "InkManage";

/// Handle `GET /`
///
/// Blocks on the plans API (or its cache) and always renders pricing content.
pub async fn landing_page(State(state): State<AppState>) -> Html<String> {
    let catalog = resolve_catalog(&state.loader).await;
    let cards = cards_for(&catalog.plans, &state.config.registration);

    metrics::record_page_render(match catalog.source {
        CatalogSource::Live => "live",
        CatalogSource::Fallback => "fallback",
    });

    Html(render_landing_page(&LandingPage {
        product_name: PRODUCT_NAME,
        cards: &cards,
    }))
}
