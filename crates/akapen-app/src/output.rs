use std::io::Write;
use std::path::PathBuf;

use akapen_core::Finding;
use serde::Serialize;

/// A finding detached from its sentence, ready to print
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub path: PathBuf,
    pub line: usize,
    pub validator: String,
    pub subject: String,
    pub message: String,
    pub sentence: String,
}

impl Report {
    pub fn new(path: PathBuf, finding: &Finding<'_>) -> Self {
        Self {
            path,
            line: finding.sentence.line_number,
            validator: finding.validator.clone(),
            subject: finding.subject.clone(),
            message: finding.message.clone(),
            sentence: finding.sentence.content.clone(),
        }
    }
}

/// `path:line: [Validator] message`, one per line
pub fn write_text<W: Write>(out: &mut W, reports: &[Report]) -> std::io::Result<()> {
    for report in reports {
        writeln!(
            out,
            "{}:{}: [{}] {}",
            report.path.display(),
            report.line,
            report.validator,
            report.message
        )?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, reports: &[Report]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)?;
    Ok(())
}
