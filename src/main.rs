use clap::Parser;
use part_catalogue::app;
use part_catalogue::utils::error::{CatalogueError, ErrorCategory};
use part_catalogue::utils::{logger, validation::Validate};
use part_catalogue::{CliConfig, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Logging
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    // Exit code follows the error category
    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ {} failed: {} (Category: {:?})",
            cli.command.part_number(),
            e,
            e.category()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }

    Ok(())
}

async fn run(cli: &CliConfig) -> Result<(), CatalogueError> {
    // Config file, then flag overrides; the endpoint is checked only for lookups
    let settings = cli.resolve()?;
    settings.validate()?;

    match &cli.command {
        Command::Validate { part_number } => {
            let catalogue = app::build_offline_catalogue(&settings)?;
            let valid = catalogue.validate(part_number);
            if !valid {
                tracing::warn!("{} is not a valid part number", part_number);
            }
            println!("{}", valid);
        }
        Command::Excluded { part_number } => {
            let catalogue = app::build_offline_catalogue(&settings)?;
            let excluded = catalogue.is_excluded(part_number).await?;
            println!("{}", excluded);
        }
        Command::Compatible { part_number } => {
            // Only this command needs the lookup service
            let catalogue = app::build_catalogue(&settings)?;
            let parts = catalogue.get_compatible_parts(part_number).await?;
            tracing::info!("✅ {} compatible parts for {}", parts.len(), part_number);
            println!("{}", serde_json::to_string_pretty(&parts)?);
        }
    }

    Ok(())
}

fn exit_code(error: &CatalogueError) -> i32 {
    match error.category() {
        ErrorCategory::Data => 3,
        ErrorCategory::Upstream if error.is_retryable() => 2,
        _ => 1,
    }
}
