//! Bounded history of admission attempts.

use crate::block::Block;
use crate::error::Rejection;
use permchain_consensus::Tally;
use permchain_types::{BlockId, ParticipantId, Timestamp};
use std::collections::VecDeque;

#[derive(Clone, Debug, PartialEq)]
pub enum AdmissionOutcome {
    Admitted { tally: Tally },
    Rejected(Rejection),
}

/// One proposal and how it ended.
#[derive(Clone, Debug, PartialEq)]
pub struct AdmissionRecord {
    pub block_id: BlockId,
    pub proposer: ParticipantId,
    pub decided_at: Timestamp,
    pub outcome: AdmissionOutcome,
}

impl AdmissionRecord {
    pub fn new(block: &Block, outcome: AdmissionOutcome) -> Self {
        Self {
            block_id: block.id,
            proposer: block.proposer,
            decided_at: Timestamp::now(),
            outcome,
        }
    }

    pub fn admitted(&self) -> bool {
        matches!(self.outcome, AdmissionOutcome::Admitted { .. })
    }

    /// The ballots behind this decision, if a vote was held.
    pub fn tally(&self) -> Option<&Tally> {
        match &self.outcome {
            AdmissionOutcome::Admitted { tally }
            | AdmissionOutcome::Rejected(Rejection::ConsensusRejected { tally }) => Some(tally),
            AdmissionOutcome::Rejected(_) => None,
        }
    }
}

/// Ring buffer of the most recent admission records, oldest first.
#[derive(Clone, Debug)]
pub struct AuditLog {
    records: VecDeque<AdmissionRecord>,
    capacity: usize,
}

impl AuditLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, record: AdmissionRecord) {
        if self.capacity == 0 {
            return;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    pub fn iter(&self) -> impl Iterator<Item = &AdmissionRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&AdmissionRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
