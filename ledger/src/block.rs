//! Block: one transfer, linked to its predecessor by hash.

use permchain_crypto::{sha256_multi, sign_message, verify_signature, CryptoError};
use permchain_transactions::Transaction;
use permchain_types::{
    BlockHash, BlockId, ParticipantId, PrivateKey, PublicKey, Signature, Timestamp,
};
use serde::{Deserialize, Serialize};

/// A block on the chain.
///
/// Blocks are built and signed by their proposer, then either appended
/// permanently or discarded by admission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,

    /// The single transfer this block carries.
    pub transaction: Transaction,

    /// Participant that built and signed this block.
    pub proposer: ParticipantId,

    /// Hash of the chain head this block extends.
    pub previous_hash: BlockHash,

    /// Creation time.
    pub timestamp: Timestamp,

    /// Content hash, set by [`Block::sign`] (or at genesis).
    pub hash: Option<BlockHash>,

    /// Proposer's signature over `hash`.
    pub signature: Option<Signature>,
}

impl Block {
    /// Wrap `transaction` in an unsigned block extending `previous_hash`.
    pub fn new(
        transaction: Transaction,
        previous_hash: BlockHash,
        proposer: ParticipantId,
    ) -> Self {
        Self {
            id: BlockId::generate(),
            transaction,
            proposer,
            previous_hash,
            timestamp: Timestamp::now(),
            hash: None,
            signature: None,
        }
    }

    /// SHA-256 over the transaction id, previous hash, timestamp and proposer id.
    pub fn compute_hash(&self) -> BlockHash {
        let tx_id = self.transaction.id.to_string();
        let timestamp = self.timestamp.as_millis().to_string();
        let proposer = self.proposer.to_string();
        BlockHash::new(sha256_multi(&[
            tx_id.as_bytes(),
            self.previous_hash.as_bytes(),
            timestamp.as_bytes(),
            proposer.as_bytes(),
        ]))
    }

    pub fn sign(&mut self, private_key: &PrivateKey) -> Result<(), CryptoError> {
        let hash = self.compute_hash();
        let signature = sign_message(hash.as_bytes(), private_key)?;
        self.hash = Some(hash);
        self.signature = Some(signature);
        Ok(())
    }

    /// Whether this block was signed under `public_key` and is unaltered.
    pub fn verify(&self, public_key: &PublicKey) -> bool {
        let (Some(hash), Some(signature)) = (&self.hash, &self.signature) else {
            return false;
        };
        *hash == self.compute_hash() && verify_signature(hash.as_bytes(), signature, public_key)
    }

    pub fn is_genesis(&self) -> bool {
        self.transaction.is_genesis()
    }
}
