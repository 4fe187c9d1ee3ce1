//! Voter unreliability and deliberation latency.
//!
//! A voter may reject any block with a small fixed probability and pauses
//! before every ballot. Both draws come from a [`VoteRandomness`] held by the
//! ledger so tests can script them; see `permchain_nullables::NullRandomness`.

use crate::error::ConsensusError;
use permchain_types::LedgerParams;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

const MIN_QUORUM: usize = 2;

/// Source of the non-deterministic parts of a ballot.
pub trait VoteRandomness: Send {
    /// Whether the next voter rejects regardless of block validity.
    fn arbitrary_rejection(&mut self) -> bool;

    /// How long the next voter deliberates before deciding.
    fn deliberation(&mut self) -> Duration;

    /// Human-readable name of this source.
    fn name(&self) -> &str;
}

/// ChaCha-backed randomness, reproducible when seeded.
pub struct SeededRandomness {
    rng: ChaCha8Rng,
    rejection_bps: u32,
    min_ms: u64,
    max_ms: u64,
}

impl SeededRandomness {
    pub fn new(
        seed: Option<u64>,
        rejection_bps: u32,
        min_ms: u64,
        max_ms: u64,
    ) -> Result<Self, ConsensusError> {
        if rejection_bps > 10_000 {
            return Err(ConsensusError::RejectionProbabilityOutOfRange(rejection_bps));
        }
        if min_ms > max_ms {
            return Err(ConsensusError::InvertedDeliberationRange { min_ms, max_ms });
        }
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            rng,
            rejection_bps,
            min_ms,
            max_ms,
        })
    }

    /// Build from the simulation knobs in `params`. A quorum below two is
    /// rejected.
    pub fn from_params(params: &LedgerParams, seed: Option<u64>) -> Result<Self, ConsensusError> {
        if params.min_active_participants < MIN_QUORUM {
            return Err(ConsensusError::QuorumTooSmall(params.min_active_participants));
        }
        Self::new(
            seed,
            params.arbitrary_rejection_bps,
            params.deliberation_min_ms,
            params.deliberation_max_ms,
        )
    }
}

impl VoteRandomness for SeededRandomness {
    fn arbitrary_rejection(&mut self) -> bool {
        self.rng.gen_range(0..10_000u32) < self.rejection_bps
    }

    fn deliberation(&mut self) -> Duration {
        Duration::from_millis(self.rng.gen_range(self.min_ms..=self.max_ms))
    }

    fn name(&self) -> &str {
        "chacha8"
    }
}
