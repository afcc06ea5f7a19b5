use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    #[default]
    Grep,
    Csv,
    Json,
}

impl OutputStyle {
    /// Resolve a style name. Unknown names fall back to grep.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "grep" => OutputStyle::Grep,
            "csv" => OutputStyle::Csv,
            "json" => OutputStyle::Json,
            other => {
                log::warn!("unknown output style {:?}, using grep", other);
                OutputStyle::Grep
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    pub file: String,
    pub page: u32,
    pub offset: usize,
    pub context: String,
}

/// Writes match records in the style chosen for the run
pub struct Printer<W: Write> {
    out: W,
    style: OutputStyle,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, style: OutputStyle) -> Self {
        Printer { out, style }
    }

    /// Emit anything that precedes the first record
    pub fn begin(&mut self) -> io::Result<()> {
        if self.style == OutputStyle::Csv {
            writeln!(self.out, "\"filename\",\"page\",\"colum\",\"context\"")?;
        }
        Ok(())
    }

    pub fn print(&mut self, record: &MatchRecord) -> io::Result<()> {
        match self.style {
            OutputStyle::Grep => writeln!(
                self.out,
                "{}:{}:{}: {}",
                record.file, record.page, record.offset, record.context
            ),
            OutputStyle::Csv => writeln!(
                self.out,
                "\"{}\",\"{}\",\"{}\",\"{}\"",
                csv_escape(&record.file),
                record.page,
                record.offset,
                csv_escape(&record.context)
            ),
            OutputStyle::Json => {
                serde_json::to_writer(&mut self.out, record)?;
                writeln!(self.out)
            }
        }
    }

    pub fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn csv_escape(field: &str) -> String {
    field.replace('"', "\"\"")
}
