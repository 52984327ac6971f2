use business::domain::analysis::image::ImageSource;
use business::domain::analysis::use_cases::analyze_barcode::AnalyzeBarcodeParams;
use business::domain::analysis::use_cases::analyze_image::AnalyzeProductImageParams;
use business::domain::shared::value_objects::AuthToken;
use clap::Parser;
use dotenvy::dotenv;

mod config;
mod setup;

use config::app_config::AppConfig;
use setup::cli::{Cli, Command};
use setup::dependency_injection::DependencyContainer;
use setup::output;

/// CLI Entry Point
///
/// Loads configuration, wires the analysis use cases and runs one call.
/// - config/: API connection settings
/// - setup/: argument parsing, dependency injection and output rendering
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Parse arguments and load configuration
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    tracing::debug!(base_url = %config.api.base_url, "Configuration loaded");

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);
    let token = AuthToken::new(cli.token.unwrap_or_default());

    // 5. Run the requested analysis
    match cli.command {
        Command::Barcode { code, product_name } => {
            let response = container
                .analyze_barcode
                .execute(AnalyzeBarcodeParams {
                    barcode: code,
                    product_name,
                    token,
                })
                .await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(response.body())?);
            } else {
                print!("{}", output::render_barcode(&response.envelope()?));
            }
        }
        Command::Image { path } => {
            let response = container
                .analyze_product_image
                .execute(AnalyzeProductImageParams {
                    image: Some(ImageSource::Path(path)),
                    token,
                })
                .await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(response.body())?);
            } else {
                print!("{}", output::render_image(&response.envelope()?));
            }
        }
    }

    Ok(())
}
