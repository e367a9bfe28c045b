use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use inkmanage_landing::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let command = args.get_command();

    // `start` configures logging from the loaded config itself
    if !matches!(command, cli::Commands::Start) {
        init_tracing("warn", "text");
    }

    match command {
        cli::Commands::Start => {
            commands::start::execute(&args.config).await?;
        }
        cli::Commands::Plans { json } => {
            commands::plans::execute(&args.config, json).await?;
        }
        cli::Commands::Test => {
            commands::test::execute(&args.config)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("InkManage Landing v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
