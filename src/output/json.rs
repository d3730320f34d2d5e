use crate::errors::Result;
use crate::report::ProjectReport;
use std::io::Write;

/// Write the project report as pretty-printed JSON.
pub fn write_report<W: Write>(writer: &mut W, report: &ProjectReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}
