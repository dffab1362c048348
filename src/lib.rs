//! Download NPR "Books We Love" yearly datasets to local JSON files.

pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod seeder;
