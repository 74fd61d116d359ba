use crate::error::Result;
use crate::model::{ReportRow, CSV_HEADER};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const LINE_ENDING: &str = "\r\n";

/// Write the header and `rows` to `path`, replacing any existing file.
pub fn write_csv(rows: &[ReportRow], path: &Path) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_rows(rows, &mut out)?;
    out.flush()?;
    Ok(())
}

fn write_rows<W: Write>(rows: &[ReportRow], out: &mut W) -> std::io::Result<()> {
    write_record(out, CSV_HEADER.iter().map(|h| Cow::Borrowed(*h)))?;
    for row in rows {
        write_record(
            out,
            [
                Cow::Borrowed(row.month.as_str()),
                Cow::Borrowed(row.branch.as_str()),
                Cow::Owned(format_average(row.average_java)),
                Cow::Owned(format_average(row.average_python)),
                Cow::Owned(format_average(row.average_total)),
            ],
        )?;
    }
    Ok(())
}

fn write_record<'a, W, I>(out: &mut W, fields: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Cow<'a, str>>,
{
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.write_all(b",")?;
        }
        out.write_all(escape_field(&field).as_bytes())?;
    }
    out.write_all(LINE_ENDING.as_bytes())
}

fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Shortest round-trip decimal, always with a fractional part (`4.0`, `1.5`).
pub fn format_average(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}
