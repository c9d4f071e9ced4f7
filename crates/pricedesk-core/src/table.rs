use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Symbol, TableError, ValidationError};

/// A single (symbol, price) association.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub symbol: Symbol,
    pub price: f64,
}

impl PriceEntry {
    pub fn new(symbol: Symbol, price: f64) -> Result<Self, ValidationError> {
        if !price.is_finite() {
            return Err(ValidationError::NonFinitePrice);
        }
        if price < 0.0 {
            return Err(ValidationError::NegativePrice);
        }

        // Normalize -0.0 to +0.0 so total_cmp treats it as a price tie.
        Ok(Self {
            symbol,
            price: price + 0.0,
        })
    }

    /// Total order on (price, symbol). Prices are validated finite and zero
    /// is normalized at construction, so `total_cmp` agrees with numeric
    /// order; symbol breaks price ties.
    pub fn cmp_by_price(&self, other: &Self) -> Ordering {
        self.price
            .total_cmp(&other.price)
            .then_with(|| self.symbol.cmp(&other.symbol))
    }
}

/// Unordered symbol -> price mapping with derived ordered views.
///
/// Built once, never mutated. Queries on an empty table fail with
/// [`TableError::EmptyTable`].
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    prices: HashMap<Symbol, f64>,
}

impl PriceTable {
    /// Build a table from a sequence of entries. A repeated symbol silently
    /// replaces the earlier price (last-write-wins, standard map semantics).
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = PriceEntry>,
    {
        let prices = entries
            .into_iter()
            .map(|entry| (entry.symbol, entry.price))
            .collect();

        Self { prices }
    }

    /// Parse, validate, and build from raw (symbol, price) pairs.
    pub fn build_from_raw<'a, I>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(raw, price)| PriceEntry::new(Symbol::parse(raw)?, price))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::build(entries))
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn get(&self, symbol: &Symbol) -> Option<f64> {
        self.prices.get(symbol).copied()
    }

    /// Entry with the lowest price; price ties resolve to the
    /// lexicographically smallest symbol.
    pub fn min_entry(&self) -> Result<PriceEntry, TableError> {
        self.entries()
            .min_by(PriceEntry::cmp_by_price)
            .ok_or(TableError::EmptyTable)
    }

    /// Entry with the highest price; price ties resolve to the
    /// lexicographically largest symbol.
    pub fn max_entry(&self) -> Result<PriceEntry, TableError> {
        self.entries()
            .max_by(PriceEntry::cmp_by_price)
            .ok_or(TableError::EmptyTable)
    }

    /// All entries sorted ascending by (price, symbol).
    pub fn sorted_entries(&self) -> Result<Vec<PriceEntry>, TableError> {
        if self.prices.is_empty() {
            return Err(TableError::EmptyTable);
        }

        let mut entries: Vec<_> = self.entries().collect();
        entries.sort_by(PriceEntry::cmp_by_price);
        Ok(entries)
    }

    fn entries(&self) -> impl Iterator<Item = PriceEntry> + '_ {
        self.prices.iter().map(|(symbol, &price)| PriceEntry {
            symbol: symbol.clone(),
            price,
        })
    }
}
