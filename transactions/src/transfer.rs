//! The transfer transaction and its content hash.

use crate::error::TransactionError;
use permchain_crypto::{sha256_multi, sign_message, verify_signature};
use permchain_types::{Amount, ParticipantId, PrivateKey, PublicKey, Signature, TxHash, TxId};
use serde::{Deserialize, Serialize};

/// An intent to move `amount` from `sender` to `recipient`.
///
/// `hash` and `signature` are empty until [`Transaction::sign`] runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TxId,
    pub sender: ParticipantId,
    pub recipient: ParticipantId,
    pub amount: Amount,
    pub hash: Option<TxHash>,
    pub signature: Option<Signature>,
}

impl Transaction {
    /// Build an unsigned transfer with a fresh id.
    ///
    /// The genesis identity is reserved and may appear on neither side.
    pub fn new(
        sender: ParticipantId,
        recipient: ParticipantId,
        amount: Amount,
    ) -> Result<Self, TransactionError> {
        if amount.is_zero() {
            return Err(TransactionError::InvalidArgument(
                "amount must be positive".into(),
            ));
        }
        if recipient.is_genesis() {
            return Err(TransactionError::InvalidArgument(
                "recipient must be a participant identifier, not the genesis identity".into(),
            ));
        }
        if sender.is_genesis() {
            return Err(TransactionError::InvalidArgument(
                "sender must be a participant identifier, not the genesis identity".into(),
            ));
        }
        Ok(Self {
            id: TxId::generate(),
            sender,
            recipient,
            amount,
            hash: None,
            signature: None,
        })
    }

    /// The zero-identity, zero-amount transaction wrapped by the genesis block.
    pub fn genesis() -> Self {
        Self {
            id: TxId::GENESIS,
            sender: ParticipantId::GENESIS,
            recipient: ParticipantId::GENESIS,
            amount: Amount::ZERO,
            hash: None,
            signature: None,
        }
    }

    pub fn is_genesis(&self) -> bool {
        self.sender.is_genesis()
    }

    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    /// SHA-256 over sender bytes, recipient bytes, decimal amount and id string.
    pub fn compute_hash(&self) -> TxHash {
        let amount = self.amount.to_decimal_string();
        let id = self.id.to_string();
        TxHash::new(sha256_multi(&[
            self.sender.as_bytes(),
            self.recipient.as_bytes(),
            amount.as_bytes(),
            id.as_bytes(),
        ]))
    }

    /// Hash the content and sign the hash. Re-signing overwrites both fields.
    pub fn sign(&mut self, private_key: &PrivateKey) -> Result<(), TransactionError> {
        let hash = self.compute_hash();
        let signature = sign_message(hash.as_bytes(), private_key)?;
        self.hash = Some(hash);
        self.signature = Some(signature);
        tracing::trace!(tx = %self.id, "transaction signed");
        Ok(())
    }

    /// Whether this transaction was signed by the holder of `public_key` and
    /// has not been altered since.
    pub fn verify(&self, public_key: &PublicKey) -> bool {
        let (Some(hash), Some(signature)) = (&self.hash, &self.signature) else {
            return false;
        };
        if *hash != self.compute_hash() {
            return false;
        }
        verify_signature(hash.as_bytes(), signature, public_key)
    }
}
