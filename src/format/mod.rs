//! Output sinks for resume records

pub mod console;
pub mod json;

use anyhow::Result;
use std::io::Write;

use crate::core::ResumeRecord;

pub use console::{ConsoleFormatter, write_resume};
pub use json::{JsonFormatter, load_from_json, save_to_json, to_json_string};

/// Renders a finished record. Formatters never modify the record.
pub trait Formatter {
    fn write_record(&mut self, output: &mut dyn Write, record: &ResumeRecord) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatters_share_the_record() {
        let mut record = ResumeRecord::new();
        record.skills.push("Rust".to_string());

        let formatters: Vec<Box<dyn Formatter>> =
            vec![Box::new(ConsoleFormatter), Box::new(JsonFormatter)];

        for mut formatter in formatters {
            let mut output: Vec<u8> = Vec::new();
            formatter.write_record(&mut output, &record).unwrap();
            let text = String::from_utf8(output).unwrap();
            assert!(text.contains("Rust"));
        }
        assert_eq!(record.skills, vec!["Rust"]);
    }
}
