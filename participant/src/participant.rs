//! The participant: key holder, transfer author, block proposer and voter.

use crate::error::ParticipantError;
use permchain_consensus::{Ballot, ProgressSink, VoteRandomness};
use permchain_crypto::generate_keypair;
use permchain_ledger::{evaluate, Block, Ledger, Registration};
use permchain_transactions::Transaction;
use permchain_types::{Amount, KeyPair, ParticipantId, PublicKey};
use std::fmt;

/// A registered ledger participant.
///
/// The private key never leaves this struct and is dropped with it. The
/// balance lives in the ledger roster; see [`Participant::balance`].
pub struct Participant {
    id: ParticipantId,
    name: String,
    keys: KeyPair,
}

impl Participant {
    /// Generate a key pair sized by the ledger's `key_bits` and register.
    pub fn new(
        name: impl Into<String>,
        ledger: &mut Ledger,
        initial_balance: Amount,
    ) -> Result<Self, ParticipantError> {
        let keys = generate_keypair(ledger.params().key_bits)?;
        Ok(Self::with_keypair(name, keys, ledger, initial_balance))
    }

    /// Register with an existing key pair.
    pub fn with_keypair(
        name: impl Into<String>,
        keys: KeyPair,
        ledger: &mut Ledger,
        initial_balance: Amount,
    ) -> Self {
        let participant = Self {
            id: ParticipantId::generate(),
            name: name.into(),
            keys,
        };
        ledger.register_participant(participant.registration(initial_balance));
        participant
    }

    fn registration(&self, initial_balance: Amount) -> Registration {
        Registration {
            id: self.id,
            name: self.name.clone(),
            public_key: self.keys.public.clone(),
            initial_balance,
        }
    }

    pub fn id(&self) -> ParticipantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.keys.public
    }

    pub fn key_bits(&self) -> usize {
        self.keys.public.bits()
    }

    /// Current balance as recorded by `ledger`.
    pub fn balance(&self, ledger: &Ledger) -> Amount {
        ledger.balance_of(&self.id).unwrap_or(Amount::ZERO)
    }

    /// Build and sign a transfer to `recipient`.
    pub fn create_transaction(
        &self,
        recipient: ParticipantId,
        amount: Amount,
    ) -> Result<Transaction, ParticipantError> {
        let mut tx = Transaction::new(self.id, recipient, amount)?;
        tx.sign(&self.keys.private)?;
        Ok(tx)
    }

    /// Like [`Participant::create_transaction`], parsing the recipient id.
    pub fn create_transaction_to(
        &self,
        recipient: &str,
        amount: Amount,
    ) -> Result<Transaction, ParticipantError> {
        self.create_transaction(recipient.parse()?, amount)
    }

    /// Wrap `transaction` in a block on top of the current head and sign it.
    pub fn build_block(
        &self,
        ledger: &Ledger,
        transaction: Transaction,
    ) -> Result<Block, ParticipantError> {
        let previous_hash = ledger.head_hash()?;
        let mut block = Block::new(transaction, previous_hash, self.id);
        block.sign(&self.keys.private)?;
        Ok(block)
    }

    /// Build a block around `transaction` and submit it for admission.
    ///
    /// Returns the admitted block, or `None` if the ledger rejected it. The
    /// reason for a rejection is in the ledger's audit log.
    pub fn propose_block(
        &self,
        ledger: &mut Ledger,
        transaction: Transaction,
        progress: &mut dyn ProgressSink,
    ) -> Result<Option<Block>, ParticipantError> {
        progress.notify(&format!("{} is proposing a new block...", self.name));
        let block = self.build_block(ledger, transaction)?;
        progress.notify("block signed and ready for validation");

        match ledger.admit_block(block, progress) {
            Ok(admitted) => {
                let admitted = admitted.clone();
                progress.notify("block added to the ledger");
                Ok(Some(admitted))
            }
            Err(rejection) => {
                tracing::debug!(proposer = %self.name, %rejection, "proposal rejected");
                progress.notify("block was not added to the ledger");
                Ok(None)
            }
        }
    }

    /// Judge `block` against `ledger` as this participant.
    pub fn vote(
        &self,
        ledger: &Ledger,
        block: &Block,
        randomness: &mut dyn VoteRandomness,
    ) -> Ballot {
        let reason = evaluate(&ledger.view(), block, randomness);
        Ballot::new(self.id, self.name.clone(), reason)
    }

    /// Register again, e.g. with a ledger that has not seen this participant.
    /// An existing balance is kept.
    pub fn rejoin(&self, ledger: &mut Ledger, initial_balance: Amount) -> bool {
        ledger.register_participant(self.registration(initial_balance))
    }
}

impl fmt::Debug for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Participant")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("key_bits", &self.key_bits())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use permchain_consensus::VoteReason;
    use permchain_nullables::NullRandomness;
    use permchain_types::LedgerParams;

    fn test_ledger() -> Ledger {
        let params = LedgerParams {
            key_bits: 1024,
            ..LedgerParams::instant()
        };
        Ledger::with_randomness(params, NullRandomness::reliable())
    }

    #[test]
    fn new_participant_is_registered() {
        let mut ledger = test_ledger();
        let alice = Participant::new("alice", &mut ledger, Amount::new(50)).unwrap();
        assert!(ledger.is_active(&alice.id()));
        assert_eq!(alice.balance(&ledger), Amount::new(50));
        assert_eq!(alice.key_bits(), 1024);
        assert_eq!(ledger.public_key(&alice.id()), Some(alice.public_key()));
    }

    #[test]
    fn zero_amount_is_invalid() {
        let mut ledger = test_ledger();
        let alice = Participant::new("alice", &mut ledger, Amount::new(50)).unwrap();
        let err = alice
            .create_transaction(ParticipantId::generate(), Amount::ZERO)
            .unwrap_err();
        assert!(matches!(err, ParticipantError::InvalidArgument(_)));
    }

    #[test]
    fn malformed_recipient_is_invalid() {
        let mut ledger = test_ledger();
        let alice = Participant::new("alice", &mut ledger, Amount::new(50)).unwrap();
        let err = alice
            .create_transaction_to("not-a-uuid", Amount::new(1))
            .unwrap_err();
        assert!(matches!(err, ParticipantError::InvalidArgument(_)));
    }

    #[test]
    fn transaction_is_signed_by_creator() {
        let mut ledger = test_ledger();
        let alice = Participant::new("alice", &mut ledger, Amount::new(50)).unwrap();
        let bob = Participant::new("bob", &mut ledger, Amount::ZERO).unwrap();
        let tx = alice
            .create_transaction_to(&bob.id().to_string(), Amount::new(5))
            .unwrap();
        assert!(tx.verify(alice.public_key()));
        assert!(!tx.verify(bob.public_key()));
    }

    #[test]
    fn vote_reflects_live_balance() {
        let mut ledger = test_ledger();
        let alice = Participant::new("alice", &mut ledger, Amount::new(50)).unwrap();
        let bob = Participant::new("bob", &mut ledger, Amount::ZERO).unwrap();

        let tx = alice.create_transaction(bob.id(), Amount::new(60)).unwrap();
        let block = alice.build_block(&ledger, tx).unwrap();
        let ballot = bob.vote(&ledger, &block, &mut NullRandomness::reliable());
        assert_eq!(ballot.reason, VoteReason::InsufficientBalance);
        assert_eq!(ballot.voter, bob.id());
    }

    #[test]
    fn rejoin_after_ban_restores_activity_and_keeps_balance() {
        let mut ledger = test_ledger();
        let alice = Participant::new("alice", &mut ledger, Amount::new(50)).unwrap();
        assert!(ledger.ban(&alice.id()).unwrap());
        assert!(!ledger.is_active(&alice.id()));

        assert!(!alice.rejoin(&mut ledger, Amount::new(999)));
        assert!(ledger.is_active(&alice.id()));
        assert_eq!(alice.balance(&ledger), Amount::new(50));
        assert_eq!(ledger.public_key(&alice.id()), Some(alice.public_key()));
    }

    #[test]
    fn rejoin_on_fresh_ledger_registers_with_balance() {
        let mut first = test_ledger();
        let alice = Participant::new("alice", &mut first, Amount::new(50)).unwrap();

        let mut second = test_ledger();
        assert!(alice.rejoin(&mut second, Amount::new(7)));
        assert!(second.is_active(&alice.id()));
        assert_eq!(alice.balance(&second), Amount::new(7));
    }

    #[test]
    fn debug_hides_keys() {
        let mut ledger = test_ledger();
        let alice = Participant::new("alice", &mut ledger, Amount::ZERO).unwrap();
        let shown = format!("{alice:?}");
        assert!(shown.contains("alice"));
        assert!(!shown.contains("private"));
    }
}
