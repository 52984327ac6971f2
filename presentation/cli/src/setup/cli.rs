use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Analyze food products through the product analysis API.
#[derive(Debug, Parser)]
#[command(name = "analysis-cli", version)]
pub struct Cli {
    /// Firebase ID token sent as the bearer credential
    #[arg(long, env = "ANALYSIS_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Print the raw response body instead of a summary
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a product by its barcode
    Barcode {
        /// Barcode digits, e.g. an EAN-13 code
        code: String,
        /// Product name hint sent along with the barcode
        #[arg(long)]
        product_name: Option<String>,
    },
    /// Analyze a product from a photo of its packaging
    Image {
        /// JPEG or PNG file to upload
        path: PathBuf,
    },
}
