use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use inkmanage_landing::{
    config,
    plans::{resolve_catalog, CatalogSource, Limit, PlanLoader},
    views::format_brl,
};
use std::path::Path;

/// Execute the plans command
///
/// Performs one load against the configured plans API and prints what the
/// pricing section would render, including whether the fallback kicked in.
pub async fn execute(config_path: &Path, json: bool) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let loader = PlanLoader::new(&cfg.api)?;

    let catalog = resolve_catalog(&loader).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!("{} {}", "Endpoint:".bold(), loader.endpoint());
    if let Some(outcome) = catalog.outcome {
        println!("{} {}", "Outcome:".bold(), outcome.as_str());
    }
    match catalog.source {
        CatalogSource::Live => println!("{} {}", "Source:".bold(), "live".green()),
        CatalogSource::Fallback => println!("{} {}", "Source:".bold(), "fallback".yellow()),
    }
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ID").fg(Color::Cyan),
        Cell::new("NAME").fg(Color::Cyan),
        Cell::new("PRICE").fg(Color::Cyan),
        Cell::new("FEATURES").fg(Color::Cyan),
        Cell::new("PROJECTS").fg(Color::Cyan),
        Cell::new("TESTIMONIALS").fg(Color::Cyan),
        Cell::new("HIGHLIGHT").fg(Color::Cyan),
    ]);

    for plan in &catalog.plans {
        table.add_row(vec![
            Cell::new(&plan.id),
            Cell::new(&plan.name),
            Cell::new(format_brl(plan.monthly_price)),
            Cell::new(plan.features.join("\n")),
            Cell::new(describe_limit(plan.project_limit)),
            Cell::new(describe_limit(plan.testimonial_limit)),
            Cell::new(if plan.highlighted { "★" } else { "" }),
        ]);
    }

    println!("{table}");
    Ok(())
}

fn describe_limit(limit: Option<Limit>) -> String {
    match limit {
        Some(Limit::Capped(n)) => n.to_string(),
        Some(Limit::Unbounded) => "unlimited".to_string(),
        None => "-".to_string(),
    }
}
