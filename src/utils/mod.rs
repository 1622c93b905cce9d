//! Utility modules for resume-parser

pub mod pdf;
