//! Job-description analysis engine

pub mod vocabulary;
pub mod skills;
pub mod company;
pub mod rounds;
pub mod checklist;
pub mod plan;
pub mod questions;
pub mod scoring;
pub mod entry;
pub mod engine;

pub use engine::{analyze_jd, AnalysisEngine};
pub use entry::AnalysisEntry;
pub use scoring::{Confidence, ConfidenceMap};
