//! Value-transfer transactions.
//!
//! A [`Transaction`] moves a positive [`Amount`](permchain_types::Amount) from
//! one participant to another. It is signed by its sender immediately after
//! construction and is consumed by exactly one block.

pub mod error;
pub mod transfer;

pub use error::TransactionError;
pub use transfer::Transaction;
