pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod runner;
pub mod utils;

// Re-export key items for convenience
pub use crate::config::ParserConfig;
pub use crate::core::{ResumeRecord, Section, classify};
pub use error::ResumeError;
pub use runner::{RunOutcome, parse_pdf_resume, run, run_with_output, run_with_source};
pub use utils::pdf::{PageSource, PdfExtractSource};
