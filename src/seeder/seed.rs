//! Per-year fetch and save orchestration

use crate::models::{Outcome, SeedReport};
use crate::seeder::{target_years, DataDir, SeedError, YearFetcher};
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{info, warn};

pub struct Seeder<F> {
    fetcher: F,
    data_dir: DataDir,
}

impl<F: YearFetcher> Seeder<F> {
    pub fn new(fetcher: F, data_dir: DataDir) -> Self {
        Self { fetcher, data_dir }
    }

    /// Seed one explicit year, or every available year as of `today`.
    ///
    /// Years run sequentially in ascending order. A failed year is recorded
    /// in the report and never stops the remaining years.
    pub async fn run(&self, year: Option<i32>, today: NaiveDate) -> SeedReport {
        let years = target_years(year, today);
        let mut report = SeedReport::default();

        if years.is_empty() {
            info!("No years to download.");
            return report;
        }

        for (index, year) in years.iter().copied().enumerate() {
            info!("Downloading {} ({}/{}) ...", year, index + 1, years.len());

            match self.seed_year(year).await {
                Ok(path) => {
                    info!("✓ Saved {} to {}", year, path.display());
                    report.push(year, Outcome::Saved { path });
                }
                Err(e) => {
                    warn!("✗ {}", e);
                    report.push(year, Outcome::Failed { reason: e.to_string() });
                }
            }
        }

        info!(
            "Finished: {} saved, {} failed",
            report.saved(),
            report.failed()
        );
        report
    }

    async fn seed_year(&self, year: i32) -> Result<PathBuf, SeedError> {
        let payload = self.fetcher.fetch(year).await?;
        self.data_dir.write(year, &payload)
    }
}
