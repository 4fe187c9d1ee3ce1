//! How a single voter judges a proposed block.
//!
//! Checks run in a fixed order and the first failure decides the ballot:
//!
//! 1. arbitrary rejection (simulated unreliable voter)
//! 2. `previous_hash` equals the current head hash
//! 3. sender and recipient are both active
//! 4. block signature under the proposer key, transaction signature under
//!    the sender key
//! 5. amount is positive
//! 6. genesis transactions are approved
//! 7. sender balance covers the amount
//! 8. approve

use crate::block::Block;
use crate::chain::Chain;
use crate::roster::Roster;
use permchain_consensus::{VoteRandomness, VoteReason};
use permchain_types::{Amount, BlockHash, ParticipantId, PublicKey};
use std::thread;

/// Read-only view of the ledger state a voter inspects.
///
/// Borrows the chain and roster separately so the ledger can lend out its
/// randomness source mutably while voters read.
#[derive(Clone, Copy)]
pub struct LedgerView<'a> {
    chain: &'a Chain,
    roster: &'a Roster,
}

impl<'a> LedgerView<'a> {
    pub fn new(chain: &'a Chain, roster: &'a Roster) -> Self {
        Self { chain, roster }
    }

    pub fn head_hash(&self) -> Option<BlockHash> {
        self.chain.head_hash().ok()
    }

    pub fn is_active(&self, id: &ParticipantId) -> bool {
        self.roster.is_active(id)
    }

    pub fn public_key(&self, id: &ParticipantId) -> Option<&'a PublicKey> {
        self.roster.public_key(id)
    }

    pub fn balance_of(&self, id: &ParticipantId) -> Option<Amount> {
        self.roster.get(id).map(|m| m.balance)
    }
}

/// Deliberate, then judge `block` against `view`.
///
/// Blocks the calling thread for the deliberation pause drawn from
/// `randomness`.
pub fn evaluate(
    view: &LedgerView<'_>,
    block: &Block,
    randomness: &mut dyn VoteRandomness,
) -> VoteReason {
    let pause = randomness.deliberation();
    if !pause.is_zero() {
        thread::sleep(pause);
    }
    if randomness.arbitrary_rejection() {
        return VoteReason::ArbitraryRejection;
    }

    let tx = &block.transaction;
    if view.head_hash() != Some(block.previous_hash) {
        return VoteReason::PreviousHashMismatch;
    }
    if !view.is_active(&tx.sender) || !view.is_active(&tx.recipient) {
        return VoteReason::InactiveCounterparty;
    }

    let signatures_hold = match (view.public_key(&block.proposer), view.public_key(&tx.sender)) {
        (Some(proposer_key), Some(sender_key)) => {
            block.verify(proposer_key) && tx.verify(sender_key)
        }
        _ => false,
    };
    if !signatures_hold {
        return VoteReason::CryptographicFailure;
    }

    if tx.amount.is_zero() {
        return VoteReason::InvalidAmount;
    }
    if tx.is_genesis() {
        return VoteReason::GenesisApproved;
    }
    match view.balance_of(&tx.sender) {
        Some(balance) if balance >= tx.amount => VoteReason::Approved,
        _ => VoteReason::InsufficientBalance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Registration;
    use permchain_crypto::generate_keypair;
    use permchain_nullables::NullRandomness;
    use permchain_transactions::Transaction;
    use permchain_types::{KeyPair, PrivateKey};

    struct Fixture {
        chain: Chain,
        roster: Roster,
        alice: (ParticipantId, KeyPair),
        bob: (ParticipantId, KeyPair),
    }

    fn fixture() -> Fixture {
        let mut roster = Roster::default();
        let mut join = |name: &str, balance: u128| {
            let id = ParticipantId::generate();
            let keys = generate_keypair(1024).unwrap();
            roster.register(Registration {
                id,
                name: name.into(),
                public_key: keys.public.clone(),
                initial_balance: Amount::new(balance),
            });
            (id, keys)
        };
        let alice = join("alice", 50);
        let bob = join("bob", 0);
        Fixture {
            chain: Chain::with_genesis(),
            roster,
            alice,
            bob,
        }
    }

    fn block(f: &Fixture, amount: u128, key: &PrivateKey) -> Block {
        let mut tx = Transaction::new(f.alice.0, f.bob.0, Amount::new(amount)).unwrap();
        tx.sign(key).unwrap();
        let mut block = Block::new(tx, f.chain.head_hash().unwrap(), f.alice.0);
        block.sign(key).unwrap();
        block
    }

    fn judge(f: &Fixture, block: &Block, randomness: &mut NullRandomness) -> VoteReason {
        evaluate(&LedgerView::new(&f.chain, &f.roster), block, randomness)
    }

    #[test]
    fn valid_block_is_approved() {
        let f = fixture();
        let b = block(&f, 20, &f.alice.1.private);
        assert_eq!(judge(&f, &b, &mut NullRandomness::reliable()), VoteReason::Approved);
    }

    #[test]
    fn arbitrary_rejection_comes_first() {
        let f = fixture();
        let mut b = block(&f, 20, &f.alice.1.private);
        b.previous_hash = BlockHash::ZERO;
        assert_eq!(
            judge(&f, &b, &mut NullRandomness::unreliable()),
            VoteReason::ArbitraryRejection
        );
    }

    #[test]
    fn stale_parent_is_rejected() {
        let f = fixture();
        let mut tx = Transaction::new(f.alice.0, f.bob.0, Amount::new(1)).unwrap();
        tx.sign(&f.alice.1.private).unwrap();
        let mut b = Block::new(tx, BlockHash::new([3u8; 32]), f.alice.0);
        b.sign(&f.alice.1.private).unwrap();
        assert_eq!(
            judge(&f, &b, &mut NullRandomness::reliable()),
            VoteReason::PreviousHashMismatch
        );
    }

    #[test]
    fn banned_recipient_is_rejected() {
        let mut f = fixture();
        let b = block(&f, 1, &f.alice.1.private);
        f.roster.set_active(&f.bob.0, false).unwrap();
        assert_eq!(
            judge(&f, &b, &mut NullRandomness::reliable()),
            VoteReason::InactiveCounterparty
        );
    }

    #[test]
    fn foreign_signature_is_rejected() {
        let f = fixture();
        let b = block(&f, 1, &f.bob.1.private);
        assert_eq!(
            judge(&f, &b, &mut NullRandomness::reliable()),
            VoteReason::CryptographicFailure
        );
    }

    #[test]
    fn overdraft_is_rejected() {
        let f = fixture();
        let b = block(&f, 1_000, &f.alice.1.private);
        assert_eq!(
            judge(&f, &b, &mut NullRandomness::reliable()),
            VoteReason::InsufficientBalance
        );
    }
}
