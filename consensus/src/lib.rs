//! Consensus simulation for block admission.
//!
//! Every active participant other than the proposer casts a [`Ballot`] on a
//! proposed block. Ballots are gathered sequentially by [`poll`], which stops
//! as soon as the [`ApprovalPolicy`](permchain_types::ApprovalPolicy)
//! threshold is met and otherwise polls every voter.
//!
//! ## Module overview
//!
//! - [`ballot`]: A single voter's decision and its reason.
//! - [`tally`]: Aggregated ballots and the sequential polling loop.
//! - [`progress`]: Write-only sink for admission milestones.
//! - [`randomness`]: Injectable source of voter unreliability and deliberation delay.
//! - [`error`]: Consensus error types.

pub mod ballot;
pub mod error;
pub mod progress;
pub mod randomness;
pub mod tally;

pub use ballot::{Ballot, VoteReason};
pub use error::ConsensusError;
pub use progress::{NoProgress, ProgressSink};
pub use randomness::{SeededRandomness, VoteRandomness};
pub use tally::{poll, Tally};
