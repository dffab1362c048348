use clap::{Parser, Subcommand};
use crate::models::OutputFormat;

#[derive(Parser)]
#[command(name = "books-we-love")]
#[command(about = "Download NPR 'Books We Love' JSON data for one year or all years")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download JSON for one year or all years and store them under the data directory
    Init {
        /// Year to download (e.g. 2025). If omitted, download all available years
        #[arg(short, long)]
        year: Option<i32>,

        /// Output directory (defaults to BOOKS_DATA_DIR or ./data)
        #[arg(short, long)]
        data_dir: Option<String>,

        /// Output format (json, table, list)
        #[arg(short, long, default_value = "json")]
        output: String,
    },

    /// Print the years a full download would fetch today
    Years,
}

impl Commands {
    pub fn parse_output_format(format: &str) -> Result<OutputFormat, anyhow::Error> {
        match format.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "list" => Ok(OutputFormat::List),
            other => Err(anyhow::anyhow!("Unsupported output format: {}. Supported formats: json, table, list", other)),
        }
    }
}
