//! Permissioned hash-chain ledger.
//!
//! A single linear chain of blocks, each wrapping one transfer. Blocks enter
//! the chain only through [`Ledger::admit_block`], which runs the quorum
//! check, polls every other active participant, settles balances and appends.
//! The ledger itself only ever creates the genesis block.

pub mod audit;
pub mod block;
pub mod chain;
pub mod error;
pub mod genesis;
pub mod graph;
pub mod ledger;
pub mod roster;
pub mod vote;

pub use audit::{AdmissionOutcome, AdmissionRecord, AuditLog};
pub use block::Block;
pub use chain::Chain;
pub use error::{LedgerError, Rejection};
pub use genesis::genesis_hash;
pub use graph::RelationshipGraph;
pub use ledger::{Ledger, LedgerSummary};
pub use roster::{Member, Registration, Roster};
pub use vote::{evaluate, LedgerView};
