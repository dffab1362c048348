//! Yearly dataset seeding
//!
//! Resolves which years to fetch, downloads each year's dataset and writes
//! it to the data directory. A failed year is recorded and the run moves on
//! to the next one.

pub mod errors;
pub mod fetcher;
pub mod seed;
pub mod writer;
pub mod years;

pub use errors::SeedError;
pub use fetcher::{HttpFetcher, YearFetcher};
pub use seed::Seeder;
pub use writer::DataDir;
pub use years::{available_years, current_max_year, target_years, FIRST_YEAR};
