//! `demo`: the three reference baskets.

use std::io::Write;

use salestax_core::{Money, Product, ShoppingCart};

use crate::cli::OutputFormat;
use crate::output::write_receipt;

/// (name, price, imported, exempt)
type Line = (&'static str, Money, bool, bool);

const BASKETS: [&[Line]; 3] = [
    &[
        ("book", Money::from_cents(1249), false, true),
        ("music CD", Money::from_cents(1499), false, false),
        ("chocolate bar", Money::from_cents(85), false, true),
    ],
    &[
        ("imported box of chocolates", Money::from_cents(1000), true, true),
        ("imported bottle of perfume", Money::from_cents(4750), true, false),
    ],
    &[
        ("imported bottle of perfume", Money::from_cents(2799), true, false),
        ("bottle of perfume", Money::from_cents(1899), false, false),
        ("packet of headache pills", Money::from_cents(975), false, true),
        ("box of imported chocolates", Money::from_cents(1125), true, true),
    ],
];

pub fn demo<W: Write>(out: &mut W, format: OutputFormat) -> anyhow::Result<()> {
    for (index, basket) in BASKETS.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }

        let mut cart = ShoppingCart::new();
        for &(name, price, imported, exempt) in basket.iter() {
            cart.add_product(Product::new(name, 1, price, imported, exempt)?);
        }

        writeln!(out, "Output {}:", index + 1)?;
        write_receipt(out, &cart.generate_receipt(), format)?;
    }

    Ok(())
}
