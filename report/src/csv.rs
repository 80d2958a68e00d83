//! CSV output of a [`Sheet`].
//!
//! Every row is padded to the sheet's widest row. Cells containing a comma,
//! quote, or line break are quoted with embedded quotes doubled.

use crate::sheet::Sheet;
use std::borrow::Cow;
use std::io::Write;
use tcgen_core::{TestGenError, TestGenResult};

fn escape(cell: &str) -> Cow<'_, str> {
    if cell.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}

/// Write `sheet` as CSV with `\r\n` line endings.
pub fn write_csv(sheet: &Sheet, out: &mut impl Write) -> TestGenResult<()> {
    let width = sheet.column_count();
    for row in sheet.rows() {
        let line: Vec<Cow<'_, str>> = (0..width)
            .map(|c| escape(row.get(c).map(String::as_str).unwrap_or("")))
            .collect();
        write!(out, "{}\r\n", line.join(","))
            .map_err(|e| TestGenError::Rendering(format!("failed to write CSV row: {}", e)))?;
    }
    out.flush()?;
    Ok(())
}
