//! Ballot data: a single participant's judgment on a proposed block.

use permchain_types::ParticipantId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a voter approved or rejected a block.
///
/// Rejections are listed in the order the checks run; the first failing
/// check decides the ballot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteReason {
    /// Simulated unreliable voter.
    ArbitraryRejection,
    /// The block does not extend the voter's view of the head.
    PreviousHashMismatch,
    /// Sender or recipient is not an active participant.
    InactiveCounterparty,
    /// Block or transaction signature failed to verify.
    CryptographicFailure,
    /// Amount is not positive.
    InvalidAmount,
    /// Genesis transactions are approved without a balance check.
    GenesisApproved,
    /// Sender cannot cover the amount.
    InsufficientBalance,
    /// Every check passed.
    Approved,
}

impl VoteReason {
    /// Whether this reason accompanies an approval.
    pub fn is_approval(&self) -> bool {
        matches!(self, Self::GenesisApproved | Self::Approved)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArbitraryRejection => "arbitrary decision not to consent",
            Self::PreviousHashMismatch => "previous hash invalid",
            Self::InactiveCounterparty => "a transaction counterparty is banned from the ledger",
            Self::CryptographicFailure => "cryptographic validation failed",
            Self::InvalidAmount => "transaction amount invalid",
            Self::GenesisApproved => "genesis transaction approved",
            Self::InsufficientBalance => "sender balance insufficient",
            Self::Approved => "block valid and approved",
        }
    }
}

impl fmt::Display for VoteReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One voter's decision on one block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    pub voter: ParticipantId,
    pub voter_name: String,
    pub reason: VoteReason,
}

impl Ballot {
    pub fn new(voter: ParticipantId, voter_name: impl Into<String>, reason: VoteReason) -> Self {
        Self {
            voter,
            voter_name: voter_name.into(),
            reason,
        }
    }

    pub fn approved(&self) -> bool {
        self.reason.is_approval()
    }
}

impl fmt::Display for Ballot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.approved() { "APPROVED" } else { "REJECTED" };
        write!(f, "{}: {} - {}", self.voter_name, verdict, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_two_reasons_approve() {
        let approving: Vec<_> = [
            VoteReason::ArbitraryRejection,
            VoteReason::PreviousHashMismatch,
            VoteReason::InactiveCounterparty,
            VoteReason::CryptographicFailure,
            VoteReason::InvalidAmount,
            VoteReason::GenesisApproved,
            VoteReason::InsufficientBalance,
            VoteReason::Approved,
        ]
        .into_iter()
        .filter(VoteReason::is_approval)
        .collect();
        assert_eq!(approving, vec![VoteReason::GenesisApproved, VoteReason::Approved]);
    }

    #[test]
    fn ballot_display() {
        let ballot = Ballot::new(ParticipantId::generate(), "bob", VoteReason::InsufficientBalance);
        assert!(!ballot.approved());
        assert_eq!(ballot.to_string(), "bob: REJECTED - sender balance insufficient");
    }
}
