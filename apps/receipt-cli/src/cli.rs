use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "receipt-cli")]
#[command(about = "Compute sales tax receipts from order text or typed-in products.")]
pub struct CommandLine {
    /// Receipt output format (overrides SALESTAX_FORMAT)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Fail when an order line cannot be parsed instead of skipping it
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse order lines such as "1 book at 12.49"; reads stdin when no text is given
    #[command(alias = "p")]
    Parse { text: Vec<String> },
    /// Enter products one field at a time
    #[command(alias = "m")]
    Manual,
    /// Print the three reference baskets
    #[command(alias = "d")]
    Demo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
