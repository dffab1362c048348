use anyhow::Result;
use clap::Parser;
use tracing::info;

use books_we_love::cli::{Cli, Commands};
use books_we_love::config::Config;
use books_we_love::output;
use books_we_love::seeder::{self, DataDir, HttpFetcher, Seeder};

#[tokio::main]
async fn main() -> Result<()> {
    // Set default log level to INFO if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "books_we_love=info");
    }

    // Initialize logging to both console and file
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let file_appender = tracing_appender::rolling::never(".", "books-we-love.log");

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::from_default_env()),
        )
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();

    let cli = Cli::parse();
    let today = chrono::Local::now().date_naive();

    match &cli.command {
        Commands::Init { year, data_dir, output } => {
            let format = Commands::parse_output_format(output)?;
            let config = Config::from_env()?.with_data_dir(data_dir.as_deref());
            config.validate()?;

            info!("Seeding into {}", config.data_dir.display());

            let fetcher = HttpFetcher::from_config(&config)?;
            let seeder = Seeder::new(fetcher, DataDir::new(&config.data_dir));
            let report = seeder.run(*year, today).await;

            println!("{}", output::render(&report, format)?);

            report.ensure_success()?;
        }

        Commands::Years => {
            for year in seeder::available_years(today) {
                println!("{}", year);
            }
        }
    }

    Ok(())
}
