//! Report rendering and export

pub mod formatter;
pub mod report;

pub use formatter::{format_history, save_report_to_file, suggest_filename, OutputFormatter, ReportGenerator};
pub use report::{export_text, PrepReport};
