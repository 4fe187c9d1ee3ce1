use permchain_crypto::CryptoError;
use permchain_ledger::LedgerError;
use permchain_transactions::TransactionError;
use permchain_types::TypesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParticipantError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("ledger is empty, no block to build on")]
    EmptyLedger,

    #[error("key error: {0}")]
    Key(#[from] CryptoError),

    #[error("ledger error: {0}")]
    Ledger(LedgerError),
}

impl From<TransactionError> for ParticipantError {
    fn from(err: TransactionError) -> Self {
        match err {
            TransactionError::InvalidArgument(msg) => Self::InvalidArgument(msg),
            TransactionError::Signing(e) => Self::Key(e),
        }
    }
}

impl From<TypesError> for ParticipantError {
    fn from(err: TypesError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

impl From<LedgerError> for ParticipantError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::EmptyLedger => Self::EmptyLedger,
            other => Self::Ledger(other),
        }
    }
}
