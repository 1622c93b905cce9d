//! Human-readable console summary

use anyhow::Result;
use std::io::{self, Write};

use super::Formatter;
use crate::core::{ResumeRecord, Section};

pub struct ConsoleFormatter;

impl Formatter for ConsoleFormatter {
    fn write_record(&mut self, output: &mut dyn Write, record: &ResumeRecord) -> Result<()> {
        write_resume(output, record)?;
        Ok(())
    }
}

/// Writes the summary and flushes `output`
pub fn write_resume(output: &mut dyn Write, record: &ResumeRecord) -> io::Result<()> {
    writeln!(output, "\nPersonal Information:")?;
    if let Some(name) = record.name() {
        writeln!(output, "Name: {}", name)?;
    }
    if let Some(email) = record.email() {
        writeln!(output, "Email: {}", email)?;
    }

    for section in Section::ALL {
        writeln!(output, "\n{}:", section.title())?;
        for entry in record.section(section) {
            writeln!(output, "- {}", entry)?;
        }
    }
    output.flush()
}
