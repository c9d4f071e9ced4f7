use thiserror::Error;

/// Validation errors raised while constructing symbols and entries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("price must be finite")]
    NonFinitePrice,
    #[error("price must be non-negative")]
    NegativePrice,
}

/// Errors raised by price table queries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("operation requires at least one entry")]
    EmptyTable,
}
