use anyhow::Result;
use colored::Colorize;
use inkmanage_landing::config;
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Prints the effective configuration (defaults + file + environment) as TOML
pub fn show(config_path: &Path) -> Result<()> {
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();
    println!("{}", toml::to_string_pretty(&cfg)?);

    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Plans endpoint base: {}", cfg.api.base_url);
    println!("  Revalidate window: {}s", cfg.api.revalidate_seconds);
    println!("  Metrics: {}", if cfg.metrics.enabled { "on" } else { "off" });

    info!("Configuration validation successful");
    Ok(())
}
