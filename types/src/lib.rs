//! Fundamental types for the permchain ledger.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! identifiers, hashes, amounts, timestamps, key wrappers and ledger parameters.

pub mod amount;
pub mod block;
pub mod error;
pub mod hash;
pub mod id;
pub mod keys;
pub mod params;
pub mod time;

pub use amount::Amount;
pub use block::BlockHash;
pub use error::TypesError;
pub use hash::TxHash;
pub use id::{BlockId, ParticipantId, TxId};
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use params::{ApprovalPolicy, LedgerParams};
pub use time::Timestamp;
