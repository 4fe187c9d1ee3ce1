//! Participant library: an RSA identity registered with a ledger.
//!
//! A participant signs transfers, wraps them in signed blocks, proposes them
//! for admission and judges blocks proposed by others. It never holds a
//! reference to the ledger; every operation takes one explicitly.

pub mod error;
pub mod participant;

pub use error::ParticipantError;
pub use participant::Participant;
