//! JSON output format for resume-parser

use anyhow::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::error;

use super::Formatter;
use crate::core::ResumeRecord;
use crate::error::ResumeError;

const INDENT: &[u8] = b"    ";

/// Writes the record as a JSON object indented with four spaces
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn write_record(&mut self, output: &mut dyn Write, record: &ResumeRecord) -> Result<()> {
        write_json(output, record)?;
        Ok(())
    }
}

fn write_json(output: &mut dyn Write, record: &ResumeRecord) -> std::io::Result<()> {
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut *output, PrettyFormatter::with_indent(INDENT));
    record.serialize(&mut serializer)?;
    writeln!(output)?;
    Ok(())
}

pub fn to_json_string(record: &ResumeRecord) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_json(&mut buf, record)?;
    Ok(String::from_utf8(buf)?)
}

/// Saves the record to `path`, replacing any existing file.
///
/// The failure is logged before it is returned.
pub fn save_to_json(record: &ResumeRecord, path: &Path) -> crate::error::Result<()> {
    let result = File::create(path).and_then(|file| {
        let mut writer = BufWriter::new(file);
        write_json(&mut writer, record)?;
        writer.flush()
    });

    result.map_err(|source| {
        error!("Failed to write JSON file: {}", source);
        ResumeError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Reads a record previously written by [`save_to_json`]
pub fn load_from_json(path: &Path) -> Result<ResumeRecord> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
