//! Core module for resume-parser
//!
//! This module contains the resume record types and the line classifier.

pub mod classifier;
mod types;

pub use classifier::{LineKind, classify, classify_line};
pub use types::*;
