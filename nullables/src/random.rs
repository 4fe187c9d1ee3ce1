//! Nullable random: scripted voter unreliability with no deliberation pause.

use permchain_consensus::VoteRandomness;
use std::time::Duration;

/// A deterministic [`VoteRandomness`] for testing.
///
/// Returns pre-configured arbitrary-rejection outcomes in order, cycling when
/// the script runs out. Deliberation is always zero.
pub struct NullRandomness {
    rejections: Vec<bool>,
    index: usize,
}

impl NullRandomness {
    /// Create with a sequence of arbitrary-rejection outcomes.
    pub fn new(rejections: Vec<bool>) -> Self {
        Self {
            rejections,
            index: 0,
        }
    }

    /// Voters never reject arbitrarily.
    pub fn reliable() -> Self {
        Self::new(vec![false])
    }

    /// Every voter rejects arbitrarily.
    pub fn unreliable() -> Self {
        Self::new(vec![true])
    }

    /// Number of arbitrary-rejection draws made so far.
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl VoteRandomness for NullRandomness {
    fn arbitrary_rejection(&mut self) -> bool {
        if self.rejections.is_empty() {
            return false;
        }
        let current = self.rejections[self.index % self.rejections.len()];
        self.index += 1;
        current
    }

    fn deliberation(&mut self) -> Duration {
        Duration::ZERO
    }

    fn name(&self) -> &str {
        "null-randomness"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_cycles() {
        let mut r = NullRandomness::new(vec![true, false]);
        let drawn: Vec<bool> = (0..5).map(|_| r.arbitrary_rejection()).collect();
        assert_eq!(drawn, vec![true, false, true, false, true]);
        assert_eq!(r.draws(), 5);
    }

    #[test]
    fn empty_script_is_reliable() {
        let mut r = NullRandomness::new(Vec::new());
        assert!(!r.arbitrary_rejection());
        assert_eq!(r.deliberation(), Duration::ZERO);
    }
}
