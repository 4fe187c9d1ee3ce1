use permchain_consensus::{ConsensusError, Tally};
use permchain_types::{Amount, BlockId, ParticipantId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger has no blocks")]
    EmptyLedger,

    #[error("block {block_id} invalid: {reason}")]
    ChainCorrupted { block_id: BlockId, reason: String },

    #[error("participant not found: {0}")]
    UnknownParticipant(ParticipantId),

    #[error("invalid ledger parameters: {0}")]
    InvalidParams(#[from] ConsensusError),
}

/// Why a proposed block was not admitted. Nothing was changed.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Rejection {
    #[error("not enough active participants: {active} active, {required} required")]
    NoQuorum { active: usize, required: usize },

    #[error("consensus failed: {tally}")]
    ConsensusRejected { tally: Tally },

    #[error("participant {0} is not active at settlement")]
    InactiveCounterparty(ParticipantId),

    #[error("insufficient balance at settlement: needed {needed}, available {available}")]
    InsufficientBalance { needed: Amount, available: Amount },

    #[error("balance of {0} would overflow")]
    BalanceOverflow(ParticipantId),
}
