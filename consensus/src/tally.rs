//! Tallying ballots and the sequential polling loop.
//!
//! Polling stops at the first ballot that brings approvals up to the
//! threshold, so an accepted tally usually holds fewer ballots than there
//! were eligible voters. A rejected tally always holds every voter's ballot.
//! Audit consumers can tell the two apart with [`Tally::is_exhaustive`].

use crate::ballot::{Ballot, VoteReason};
use permchain_types::ApprovalPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ballots gathered for one proposed block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Voters eligible to cast a ballot (active participants minus the proposer).
    pub eligible: usize,
    /// Approvals needed for admission.
    pub required: usize,
    /// Ballots in the order they were cast.
    pub ballots: Vec<Ballot>,
}

impl Tally {
    pub fn new(eligible: usize, required: usize) -> Self {
        Self {
            eligible,
            required,
            ballots: Vec::with_capacity(eligible),
        }
    }

    pub fn record(&mut self, ballot: Ballot) {
        self.ballots.push(ballot);
    }

    pub fn approvals(&self) -> usize {
        self.ballots.iter().filter(|b| b.approved()).count()
    }

    pub fn rejections(&self) -> usize {
        self.ballots.len() - self.approvals()
    }

    pub fn is_met(&self) -> bool {
        self.approvals() >= self.required
    }

    /// Whether every eligible voter was polled.
    pub fn is_exhaustive(&self) -> bool {
        self.ballots.len() == self.eligible
    }

    /// Rejecting voters with their reasons, in polling order.
    pub fn rejection_reasons(&self) -> impl Iterator<Item = (&str, VoteReason)> + '_ {
        self.ballots
            .iter()
            .filter(|b| !b.approved())
            .map(|b| (b.voter_name.as_str(), b.reason))
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} favourable votes (required {})",
            self.approvals(),
            self.eligible,
            self.required
        )
    }
}

/// Poll `voters` in order until the policy threshold is met.
///
/// `cast` is invoked once per polled voter. Polling never stops early on a
/// guaranteed failure.
pub fn poll<V, F>(voters: &[V], policy: ApprovalPolicy, mut cast: F) -> Tally
where
    F: FnMut(&V) -> Ballot,
{
    let required = policy.required(voters.len());
    let mut tally = Tally::new(voters.len(), required);
    for voter in voters {
        let ballot = cast(voter);
        tracing::debug!(
            voter = %ballot.voter_name,
            approved = ballot.approved(),
            reason = %ballot.reason,
            "ballot cast"
        );
        tally.record(ballot);
        if tally.is_met() {
            break;
        }
    }
    tally
}
