//! Errors raised while constructing fundamental types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypesError {
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}
