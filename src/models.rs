use serde::Serialize;
use std::path::PathBuf;

/// Result of processing a single year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Saved { path: PathBuf },
    Failed { reason: String },
}

impl Outcome {
    pub fn as_str(&self) -> &str {
        match self {
            Outcome::Saved { .. } => "saved",
            Outcome::Failed { .. } => "failed",
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, Outcome::Saved { .. })
    }

    /// Saved path or failure reason, for display
    pub fn detail(&self) -> String {
        match self {
            Outcome::Saved { path } => path.display().to_string(),
            Outcome::Failed { reason } => reason.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearOutcome {
    pub year: i32,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Per-year outcomes of one seeding run, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub outcomes: Vec<YearOutcome>,
}

impl SeedReport {
    pub fn push(&mut self, year: i32, outcome: Outcome) {
        self.outcomes.push(YearOutcome { year, outcome });
    }

    pub fn saved(&self) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.is_saved()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.saved()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Error naming the failure count when any year failed
    pub fn ensure_success(&self) -> anyhow::Result<()> {
        if self.is_success() {
            return Ok(());
        }
        anyhow::bail!("{} of {} years failed", self.failed(), self.outcomes.len())
    }

    pub fn outcome_for(&self, year: i32) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|o| o.year == year)
            .map(|o| &o.outcome)
    }
}

/// Summary shape used for JSON output
#[derive(Debug, Serialize)]
pub struct ReportSummary<'a> {
    pub total_years: usize,
    pub saved: usize,
    pub failed: usize,
    pub results: &'a [YearOutcome],
}

impl<'a> From<&'a SeedReport> for ReportSummary<'a> {
    fn from(report: &'a SeedReport) -> Self {
        Self {
            total_years: report.outcomes.len(),
            saved: report.saved(),
            failed: report.failed(),
            results: &report.outcomes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
    List,
}
