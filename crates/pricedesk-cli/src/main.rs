mod cli;
mod error;
mod output;
mod report;

use clap::Parser;

use crate::cli::Cli;
use crate::error::CliError;
use crate::report::PriceReport;

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let table = report::builtin_table()?;
    let report = PriceReport::from_table(&table)?;
    output::render(&report, cli.format, cli.pretty)
}
