//! `manual`: type products in field by field.
//!
//! Every prompt repeats until the answer is valid, so the values handed to
//! `Product::new` are already in range.

use std::io::{BufRead, Write};

use anyhow::bail;
use salestax_core::{Money, Product, ShoppingCart, MAX_PRICE, MAX_QUANTITY};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::output::write_receipt;

/// Line-oriented question/answer loop over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{prompt} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input ended while waiting for: {prompt}");
        }
        Ok(line.trim().to_string())
    }

    pub fn ask_text(&mut self, prompt: &str) -> anyhow::Result<String> {
        loop {
            let answer = self.ask(prompt)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    pub fn ask_integer(&mut self, prompt: &str, min: i64, max: i64) -> anyhow::Result<i64> {
        loop {
            match self.ask(prompt)?.parse::<i64>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                _ => continue,
            }
        }
    }

    pub fn ask_money(&mut self, prompt: &str, min: Money, max: Money) -> anyhow::Result<Money> {
        loop {
            match self.ask(prompt)?.parse::<Money>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                _ => continue,
            }
        }
    }

    pub fn ask_yes_no(&mut self, prompt: &str) -> anyhow::Result<bool> {
        loop {
            match self.ask(prompt)?.to_lowercase().as_str() {
                "yes" => return Ok(true),
                "no" => return Ok(false),
                _ => writeln!(self.output, "Invalid input. Please enter 'yes' or 'no'.")?,
            }
        }
    }

    /// Asks for a product count, then each product's fields.
    pub fn collect_products(&mut self) -> anyhow::Result<Vec<Product>> {
        let count = self.ask_integer("Enter the number of products:", 1, i64::MAX)?;
        let mut products = Vec::new();

        for index in 1..=count {
            writeln!(self.output, "\nEnter details for product {index}:")?;

            let name = self.ask_text("Name:")?;
            let quantity = self.ask_integer("Quantity:", 1, MAX_QUANTITY)?;
            let price = self.ask_money("Price:", Money::zero(), MAX_PRICE)?;
            let is_imported = self.ask_yes_no("Is the product imported? (yes/no):")?;
            let is_exempt =
                self.ask_yes_no("Is the product a book, food or medical product (exempt from basic sales tax)? (yes/no):")?;

            let product = Product::new(name, quantity, price, is_imported, is_exempt)?;
            debug!(name = product.name(), "Product entered");
            products.push(product);
        }

        Ok(products)
    }
}

pub fn manual<R: BufRead, W: Write>(input: R, out: W, format: OutputFormat) -> anyhow::Result<()> {
    let mut prompter = Prompter::new(input, out);
    let cart: ShoppingCart = prompter.collect_products()?.into_iter().collect();

    let mut out = prompter.into_output();
    writeln!(out, "\nReceipt:")?;
    write_receipt(&mut out, &cart.generate_receipt(), format)
}
