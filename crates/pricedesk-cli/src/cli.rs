use clap::{Parser, ValueEnum};

/// Report the minimum, maximum, and price-sorted entries of the built-in
/// ticker listing.
#[derive(Debug, Parser)]
#[command(name = "pricedesk", version, about)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output (no effect with --format table)
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}
