//! Placement prep library

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod storage;

pub use analysis::{analyze_jd, AnalysisEngine, AnalysisEntry};
pub use config::Config;
pub use error::{PrepError, Result};
