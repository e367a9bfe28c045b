use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Install the Prometheus recorder
///
/// Fails if a global recorder is already installed (e.g. a second call in tests)
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus recorder: {}", e))?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "inkmanage_plan_loads_total",
        "Plan loads by outcome (fetched, cached, empty, unavailable)"
    );
    describe_histogram!(
        "inkmanage_plan_fetch_duration_seconds",
        "Duration of plans API round trips in seconds"
    );
    describe_counter!(
        "inkmanage_plan_fallback_total",
        "Pages rendered with the static fallback plans"
    );
    describe_counter!(
        "inkmanage_page_renders_total",
        "Landing page renders"
    );
    describe_gauge!(
        "inkmanage_landing_info",
        "Landing service version information"
    );

    gauge!("inkmanage_landing_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a plan load and, for failures, why it failed
pub fn record_plan_load(outcome: &str, reason: Option<&str>) {
    counter!(
        "inkmanage_plan_loads_total",
        "outcome" => outcome.to_string(),
        "reason" => reason.unwrap_or("none").to_string(),
    )
    .increment(1);
}

pub fn record_plan_fetch_duration(duration: Duration) {
    histogram!("inkmanage_plan_fetch_duration_seconds").record(duration.as_secs_f64());
}

/// Record a render that fell back to the static plans
pub fn record_fallback(outcome: &str) {
    counter!(
        "inkmanage_plan_fallback_total",
        "outcome" => outcome.to_string(),
    )
    .increment(1);
}

pub fn record_page_render(source: &str) {
    counter!(
        "inkmanage_page_renders_total",
        "source" => source.to_string(),
    )
    .increment(1);
}
