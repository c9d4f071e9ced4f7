//! Behavior-driven tests for the price table.
//!
//! These tests verify the derived views (min, max, sorted) over the table,
//! including tie-breaks, idempotence, and the empty-table error path.

use pricedesk_core::{PriceTable, Symbol, TableError};

const LISTING: [(&str, f64); 5] = [
    ("ACME", 45.23),
    ("AAPL", 612.78),
    ("IBM", 205.55),
    ("HPQ", 37.20),
    ("FB", 10.75),
];

fn listing_table() -> PriceTable {
    PriceTable::build_from_raw(LISTING).expect("listing is valid")
}

#[test]
fn min_and_max_bound_every_entry() {
    // Given: The built-in five-symbol listing
    let table = listing_table();

    // When: Extremal entries are queried
    let min = table.min_entry().expect("non-empty");
    let max = table.max_entry().expect("non-empty");

    // Then: They bound every entry in the table
    for entry in table.sorted_entries().expect("non-empty") {
        assert!(min.price <= entry.price, "min bound violated");
        assert!(max.price >= entry.price, "max bound violated");
    }
}

#[test]
fn literal_listing_produces_documented_report() {
    let table = listing_table();

    let min = table.min_entry().expect("non-empty");
    assert_eq!(min.symbol.as_str(), "FB");
    assert_eq!(min.price, 10.75);

    let max = table.max_entry().expect("non-empty");
    assert_eq!(max.symbol.as_str(), "AAPL");
    assert_eq!(max.price, 612.78);

    let sorted = table.sorted_entries().expect("non-empty");
    let pairs: Vec<_> = sorted
        .iter()
        .map(|e| (e.symbol.as_str(), e.price))
        .collect();
    assert_eq!(
        pairs,
        [
            ("FB", 10.75),
            ("HPQ", 37.20),
            ("ACME", 45.23),
            ("IBM", 205.55),
            ("AAPL", 612.78),
        ]
    );
}

#[test]
fn sorted_entries_is_an_ordered_permutation_of_the_table() {
    let table = listing_table();
    let sorted = table.sorted_entries().expect("non-empty");

    // Same cardinality, every entry present with its table price
    assert_eq!(sorted.len(), table.len());
    for entry in &sorted {
        assert_eq!(table.get(&entry.symbol), Some(entry.price));
    }

    // Non-decreasing in (price, symbol)
    for window in sorted.windows(2) {
        assert!(
            window[0].cmp_by_price(&window[1]).is_le(),
            "entries out of order: {} before {}",
            window[0].symbol,
            window[1].symbol
        );
    }
}

#[test]
fn sorted_extremes_match_min_and_max() {
    let table = listing_table();
    let sorted = table.sorted_entries().expect("non-empty");

    assert_eq!(sorted.first(), Some(&table.min_entry().expect("non-empty")));
    assert_eq!(sorted.last(), Some(&table.max_entry().expect("non-empty")));
}

#[test]
fn repeated_queries_are_identical() {
    let table = listing_table();

    assert_eq!(table.min_entry(), table.min_entry());
    assert_eq!(table.max_entry(), table.max_entry());
    assert_eq!(table.sorted_entries(), table.sorted_entries());
}

#[test]
fn duplicate_symbols_collapse_to_last_write() {
    let table = PriceTable::build_from_raw([("X", 1.0), ("X", 2.0)]).expect("valid");

    assert_eq!(table.len(), 1);
    let symbol = Symbol::parse("X").expect("valid");
    assert_eq!(table.get(&symbol), Some(2.0));

    let only = table.min_entry().expect("non-empty");
    assert_eq!(only.price, 2.0);
    assert_eq!(only, table.max_entry().expect("non-empty"));
}

#[test]
fn empty_table_fails_every_query() {
    let table = PriceTable::build(Vec::new());

    assert_eq!(table.min_entry(), Err(TableError::EmptyTable));
    assert_eq!(table.max_entry(), Err(TableError::EmptyTable));
    assert_eq!(table.sorted_entries(), Err(TableError::EmptyTable));
}
