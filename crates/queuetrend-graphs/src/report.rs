//! JSON report of the per-day series.

use std::io::Write;

use queuetrend_common::{DailySeries, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Render `series` as JSON indented by `indent` spaces per level.
///
/// Days appear Monday through Sunday, each mapping times to queue lengths
/// in the order the times were first seen; empty days render as `{}`.
pub fn to_json(series: &DailySeries, indent: usize) -> Result<String> {
    let mut buf = Vec::new();
    write_document(&mut buf, series, indent)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the JSON report followed by a newline.
pub fn write_json<W>(writer: &mut W, series: &DailySeries, indent: usize) -> Result<()>
where
    W: Write + ?Sized,
{
    write_document(&mut *writer, series, indent)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

fn write_document<W: Write>(writer: W, series: &DailySeries, indent: usize) -> Result<()> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    series.serialize(&mut serializer)?;
    Ok(())
}
