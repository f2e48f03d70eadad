//! Receipt printing.

use std::io::Write;

use salestax_core::Receipt;

use crate::cli::OutputFormat;

/// Writes `receipt` followed by a newline.
pub fn write_receipt<W: Write>(out: &mut W, receipt: &Receipt, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{receipt}")?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(receipt)?)?,
    }
    Ok(())
}
