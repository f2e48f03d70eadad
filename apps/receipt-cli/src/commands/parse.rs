//! `parse`: order text → receipt.

use std::io::{BufRead, Write};

use salestax_core::{parse_order_text, Receipt};
use tracing::{error, info};

use crate::cli::OutputFormat;
use crate::output::write_receipt;

/// With `text`, prints one receipt for all of it. Without, reads `input`
/// line by line and prints one receipt per line.
pub fn parse<R: BufRead, W: Write>(
    text: &[String],
    input: R,
    out: &mut W,
    format: OutputFormat,
    strict: bool,
) -> anyhow::Result<()> {
    if text.is_empty() {
        return read_loop(input, out, format, strict);
    }

    let receipt = receipt_from_text(&text.join(" "), strict)?;
    write_receipt(out, &receipt, format)
}

fn read_loop<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    format: OutputFormat,
    strict: bool,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;

        if line.trim().is_empty() {
            writeln!(out, "Input cannot be empty. Please try again.")?;
            continue;
        }

        match receipt_from_text(&line, strict) {
            Ok(receipt) => write_receipt(out, &receipt, format)?,
            Err(e) => {
                error!(error = %e, "Order rejected");
                writeln!(out, "An error occurred: {e}")?;
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

fn receipt_from_text(text: &str, strict: bool) -> anyhow::Result<Receipt> {
    let report = parse_order_text(text);
    info!(
        occurrences = report.len(),
        failed = report.failures().count(),
        "Order text scanned"
    );

    let cart = if strict {
        report.into_cart_strict()?
    } else {
        report.into_cart()
    };

    Ok(cart.generate_receipt())
}
