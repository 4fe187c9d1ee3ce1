use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("signing failed: {0}")]
    Signing(#[from] permchain_crypto::CryptoError),
}
