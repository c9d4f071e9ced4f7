use serde::Serialize;

use pricedesk_core::{PriceEntry, PriceTable};

use crate::error::CliError;

/// Built-in listing reported by the binary.
const LISTING: [(&str, f64); 5] = [
    ("ACME", 45.23),
    ("AAPL", 612.78),
    ("IBM", 205.55),
    ("HPQ", 37.20),
    ("FB", 10.75),
];

/// Derived min/max/sorted views of a price table.
#[derive(Debug, Serialize)]
pub struct PriceReport {
    pub min: PriceEntry,
    pub max: PriceEntry,
    pub entries: Vec<PriceEntry>,
}

impl PriceReport {
    pub fn from_table(table: &PriceTable) -> Result<Self, CliError> {
        Ok(Self {
            min: table.min_entry()?,
            max: table.max_entry()?,
            entries: table.sorted_entries()?,
        })
    }
}

pub fn builtin_table() -> Result<PriceTable, CliError> {
    Ok(PriceTable::build_from_raw(LISTING)?)
}
