//! CSV export of the process table.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::system::process::ProcessRecord;

pub const EXPORT_HEADER: &str = "PID,Process Name,CPU %,Memory %";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes `records` to `path`, replacing any previous content.
pub fn export_processes(records: &[ProcessRecord], path: &Path) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_csv(records, &mut writer).map_err(io_err)?;
    writer.flush().map_err(io_err)?;
    tracing::info!(rows = records.len(), path = %path.display(), "exported process table");
    Ok(())
}

pub fn write_csv<W: Write>(records: &[ProcessRecord], out: &mut W) -> io::Result<()> {
    writeln!(out, "{EXPORT_HEADER}")?;
    for record in records {
        writeln!(out, "{}", format_row(record))?;
    }
    Ok(())
}

pub fn format_row(record: &ProcessRecord) -> String {
    format!(
        "{},{},{:.1}%,{:.2}%",
        record.pid,
        escape_field(&record.name),
        record.cpu_percent,
        record.memory_percent
    )
}

/// Quotes a field only when it would otherwise break the row.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
