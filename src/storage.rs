use crate::error::{Error, Result};
use crate::table::SeriesTable;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Prefix cells that a spreadsheet would evaluate as a formula.
fn sanitize_cell(s: &str) -> String {
    match s.chars().next() {
        Some('=' | '+' | '-' | '@') => format!("'{}", s),
        _ => s.to_string(),
    }
}

/// Save the table as CSV: `date,<name1>,<name2>`, missing cells left empty.
pub fn save_csv<P: AsRef<Path>>(table: &SeriesTable, path: P) -> Result<()> {
    let (name1, name2) = table.names();
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.write_record(["date".to_string(), sanitize_cell(name1), sanitize_cell(name2)])?;
    for r in table.rows() {
        wtr.serialize((r.date.format("%Y-%m-%d").to_string(), r.line1, r.line2))?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Save the table as a pretty JSON array of `{date, line1, line2}` rows.
pub fn save_json<P: AsRef<Path>>(table: &SeriesTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let s = serde_json::to_string_pretty(table.rows())?;
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut f = File::create(path).map_err(io_err)?;
    f.write_all(s.as_bytes()).map_err(io_err)?;
    Ok(())
}

