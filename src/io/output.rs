use crate::core::AnalysisResults;
use anyhow::Result;
use colored::*;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &AnalysisResults) -> Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// flake8-style `path:line:col: message` lines with a trailing summary.
pub struct TextWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> Result<()> {
        for file in &results.files {
            for violation in &file.violations {
                writeln!(
                    self.writer,
                    "{}:{}:{}: {}",
                    file.path.display().to_string().bold(),
                    violation.line,
                    violation.column,
                    violation.message
                )?;
            }
        }

        let total = results.total_violations();
        if total == 0 {
            writeln!(self.writer, "{}", "no annotation issues found".green())?;
        } else {
            let flagged = results
                .files
                .iter()
                .filter(|f| !f.violations.is_empty())
                .count();
            writeln!(
                self.writer,
                "{}",
                format!("{total} violation(s) in {flagged} file(s)").red()
            )?;
        }
        Ok(())
    }
}

pub fn create_writer(format: OutputFormat, output: Option<&Path>) -> Result<Box<dyn OutputWriter>> {
    let out: Box<dyn Write> = match output {
        Some(path) => Box::new(fs::File::create(path)?),
        None => Box::new(io::stdout()),
    };
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Text => Box::new(TextWriter::new(out)),
    })
}
