//! Seeding error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("Failed to download {year}: {message}")]
    Fetch { year: i32, message: String },

    #[error("Failed to save {year}: {message}")]
    Write { year: i32, message: String },
}

impl SeedError {
    pub fn fetch(year: i32, message: impl Into<String>) -> Self {
        SeedError::Fetch { year, message: message.into() }
    }

    pub fn write(year: i32, message: impl Into<String>) -> Self {
        SeedError::Write { year, message: message.into() }
    }

    pub fn year(&self) -> i32 {
        match self {
            SeedError::Fetch { year, .. } | SeedError::Write { year, .. } => *year,
        }
    }
}
