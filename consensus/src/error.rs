use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsensusError {
    #[error("deliberation range is inverted: min {min_ms}ms > max {max_ms}ms")]
    InvertedDeliberationRange { min_ms: u64, max_ms: u64 },

    #[error("arbitrary rejection probability {0} bps exceeds 10000")]
    RejectionProbabilityOutOfRange(u32),

    #[error("quorum of {0} active participants is below the minimum of 2")]
    QuorumTooSmall(usize),
}
