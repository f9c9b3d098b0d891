//! Indonesian tax calculation engine.
//!
//! Covers employee withholding (PPh 21), withholding on procurement,
//! services and foreign payments (PPh 22, 23, 26), VAT with the luxury
//! goods surcharge (PPN, PPnBM), deemed-profit and final taxes (PPh 15,
//! PPh 4(2)), personal progressive tax, the small business turnover tax and
//! the annual corporate settlement (PPh 29).
//!
//! Every calculator takes a plain input struct and returns a result struct
//! with all intermediate amounts. Amounts are [`rust_decimal::Decimal`]
//! values in Rupiah and rates are percentages.

pub mod calculations;
pub mod error;
pub mod models;

pub use calculations::{CalculationReport, CalculationRequest, calculate};
pub use error::{CalculationError, UnknownCategoryError};
pub use models::*;
