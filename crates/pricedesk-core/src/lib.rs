//! Core domain for pricedesk.
//!
//! This crate contains:
//! - Symbol validation and normalization
//! - The immutable price table and its derived views (min, max, sorted)

pub mod error;
pub mod symbol;
pub mod table;

pub use error::{TableError, ValidationError};
pub use symbol::Symbol;
pub use table::{PriceEntry, PriceTable};
