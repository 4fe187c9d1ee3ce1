//! Genesis block creation: the first block on every ledger.
//!
//! The genesis block carries the zero-identity transaction, is proposed by
//! the zero identity, points at the ASCII-zero placeholder parent and is
//! stamped at [`Timestamp::EPOCH`], so its hash is identical on every ledger.
//! It is never signed.

use crate::block::Block;
use permchain_transactions::Transaction;
use permchain_types::{BlockHash, BlockId, ParticipantId, Timestamp};

impl Block {
    /// The fixed first block. Hash set, no signature.
    pub fn genesis() -> Self {
        let mut block = Block {
            id: BlockId::GENESIS,
            transaction: Transaction::genesis(),
            proposer: ParticipantId::GENESIS,
            previous_hash: BlockHash::GENESIS_PARENT,
            timestamp: Timestamp::EPOCH,
            hash: None,
            signature: None,
        };
        block.hash = Some(block.compute_hash());
        block
    }
}

/// The deterministic genesis block hash.
pub fn genesis_hash() -> BlockHash {
    Block::genesis().compute_hash()
}
