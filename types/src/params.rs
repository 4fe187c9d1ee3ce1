//! Ledger parameters: the admission policy and the voter simulation knobs.

use serde::{Deserialize, Serialize};

/// How many favourable ballots a block needs, given `n` eligible voters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalPolicy {
    /// `floor(n / 3) + 1` approvals.
    OneThirdPlusOne,
    /// `floor(n / 2) + 1` approvals.
    StrictMajority,
}

impl ApprovalPolicy {
    /// Approvals required from `eligible` voters.
    pub fn required(&self, eligible: usize) -> usize {
        match self {
            Self::OneThirdPlusOne => eligible / 3 + 1,
            Self::StrictMajority => eligible / 2 + 1,
        }
    }
}

impl Default for ApprovalPolicy {
    fn default() -> Self {
        Self::OneThirdPlusOne
    }
}

/// All tunable ledger parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerParams {
    /// Approval threshold applied to the eligible voter count.
    #[serde(default)]
    pub approval_policy: ApprovalPolicy,

    /// Active participants required before any vote is held.
    #[serde(default = "default_min_active")]
    pub min_active_participants: usize,

    /// Probability (basis points, 1000 = 10%) that a voter rejects arbitrarily.
    #[serde(default = "default_rejection_bps")]
    pub arbitrary_rejection_bps: u32,

    /// Lower bound of the simulated per-ballot deliberation pause.
    #[serde(default = "default_deliberation_min_ms")]
    pub deliberation_min_ms: u64,

    /// Upper bound of the simulated per-ballot deliberation pause.
    #[serde(default = "default_deliberation_max_ms")]
    pub deliberation_max_ms: u64,

    /// RSA modulus size for newly generated participant keys.
    #[serde(default = "default_key_bits")]
    pub key_bits: usize,

    /// Number of admission records retained in the audit log.
    #[serde(default = "default_audit_capacity")]
    pub audit_log_capacity: usize,
}

fn default_min_active() -> usize {
    2
}

fn default_rejection_bps() -> u32 {
    1000
}

fn default_deliberation_min_ms() -> u64 {
    500
}

fn default_deliberation_max_ms() -> u64 {
    1000
}

fn default_key_bits() -> usize {
    2048
}

fn default_audit_capacity() -> usize {
    256
}

impl LedgerParams {
    /// The classroom simulation: 10% faulty ballots, 0.5–1s deliberation.
    pub fn simulation_defaults() -> Self {
        Self {
            approval_policy: ApprovalPolicy::default(),
            min_active_participants: default_min_active(),
            arbitrary_rejection_bps: default_rejection_bps(),
            deliberation_min_ms: default_deliberation_min_ms(),
            deliberation_max_ms: default_deliberation_max_ms(),
            key_bits: default_key_bits(),
            audit_log_capacity: default_audit_capacity(),
        }
    }

    /// No arbitrary rejections and no deliberation pause.
    pub fn instant() -> Self {
        Self {
            arbitrary_rejection_bps: 0,
            deliberation_min_ms: 0,
            deliberation_max_ms: 0,
            ..Self::simulation_defaults()
        }
    }
}

impl Default for LedgerParams {
    fn default() -> Self {
        Self::simulation_defaults()
    }
}
