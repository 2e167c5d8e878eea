//! Resume screener library

pub mod cli;
pub mod config;
pub mod embedding;
pub mod error;
pub mod extract;
pub mod output;
pub mod scoring;

pub use config::Config;
pub use error::{Result, ScreenerError};
