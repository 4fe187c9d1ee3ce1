//! End-to-end scenarios: participants proposing and voting through a ledger.

use permchain_consensus::{NoProgress, VoteReason};
use permchain_ledger::{Ledger, LedgerError, Rejection};
use permchain_nullables::{NullRandomness, RecordingProgress};
use permchain_participant::{Participant, ParticipantError};
use permchain_types::{Amount, LedgerParams};

fn ledger_with(randomness: NullRandomness) -> Ledger {
    let params = LedgerParams {
        key_bits: 1024,
        ..LedgerParams::instant()
    };
    Ledger::with_randomness(params, randomness)
}

/// A with 50, B through E with 10 each.
fn classroom(ledger: &mut Ledger) -> Vec<Participant> {
    let mut people = vec![Participant::new("A", ledger, Amount::new(50)).unwrap()];
    for name in ["B", "C", "D", "E"] {
        people.push(Participant::new(name, ledger, Amount::new(10)).unwrap());
    }
    people
}

#[test]
fn approved_transfer_moves_twenty() {
    let mut ledger = ledger_with(NullRandomness::reliable());
    let people = classroom(&mut ledger);
    let (a, b) = (&people[0], &people[1]);

    let tx = a.create_transaction(b.id(), Amount::new(20)).unwrap();
    let mut progress = RecordingProgress::new();
    let block = a
        .propose_block(&mut ledger, tx, &mut progress)
        .unwrap()
        .expect("block should be admitted");

    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.head().unwrap().id, block.id);
    assert_eq!(a.balance(&ledger), Amount::new(30));
    assert_eq!(b.balance(&ledger), Amount::new(30));
    assert!(ledger.verify_integrity().is_ok());
    assert!(block.verify(a.public_key()));
    assert!(progress.contains("A is proposing a new block"));
    assert_eq!(progress.last(), Some("block added to the ledger"));
}

#[test]
fn overdraft_leaves_chain_untouched() {
    let mut ledger = ledger_with(NullRandomness::reliable());
    let people = classroom(&mut ledger);
    let (a, b) = (&people[0], &people[1]);

    let tx = a.create_transaction(b.id(), Amount::new(1_000)).unwrap();
    let outcome = a.propose_block(&mut ledger, tx, &mut NoProgress).unwrap();
    assert!(outcome.is_none());
    assert_eq!(ledger.len(), 1);
    assert_eq!(a.balance(&ledger), Amount::new(50));

    let record = ledger.audit_log().latest().unwrap();
    let tally = record.tally().unwrap();
    assert!(tally.is_exhaustive());
    assert!(tally
        .ballots
        .iter()
        .all(|ballot| ballot.reason == VoteReason::InsufficientBalance));
}

#[test]
fn chained_transfers_conserve_value() {
    let mut ledger = ledger_with(NullRandomness::reliable());
    let people = classroom(&mut ledger);
    let total = ledger.summary().total_balance;

    for (from, to, amount) in [(0, 1, 20), (1, 2, 25), (2, 3, 5), (3, 0, 1)] {
        let tx = people[from]
            .create_transaction(people[to].id(), Amount::new(amount))
            .unwrap();
        let admitted = people[from]
            .propose_block(&mut ledger, tx, &mut NoProgress)
            .unwrap();
        assert!(admitted.is_some());
        assert_eq!(ledger.summary().total_balance, total);
    }

    assert_eq!(ledger.len(), 5);
    assert!(ledger.verify_integrity().is_ok());
    for pair in ledger.blocks().windows(2) {
        assert_eq!(pair[0].hash, Some(pair[1].previous_hash));
    }
    assert_eq!(ledger.summary().connections, 4);
}

#[test]
fn lone_participant_cannot_reach_quorum() {
    let mut ledger = ledger_with(NullRandomness::reliable());
    let a = Participant::new("A", &mut ledger, Amount::new(50)).unwrap();
    let outsider = permchain_types::ParticipantId::generate();

    let tx = a.create_transaction(outsider, Amount::new(1)).unwrap();
    assert!(a.propose_block(&mut ledger, tx, &mut NoProgress).unwrap().is_none());

    let record = ledger.audit_log().latest().unwrap();
    assert!(matches!(
        record.outcome,
        permchain_ledger::AdmissionOutcome::Rejected(Rejection::NoQuorum { active: 1, .. })
    ));
}

#[test]
fn banned_sender_is_voted_down_until_unbanned() {
    let mut ledger = ledger_with(NullRandomness::reliable());
    let people = classroom(&mut ledger);
    let (a, b) = (&people[0], &people[1]);

    ledger.ban(&a.id()).unwrap();
    let tx = a.create_transaction(b.id(), Amount::new(5)).unwrap();
    assert!(a.propose_block(&mut ledger, tx, &mut NoProgress).unwrap().is_none());
    assert_eq!(a.balance(&ledger), Amount::new(50));

    ledger.unban(&a.id()).unwrap();
    let tx = a.create_transaction(b.id(), Amount::new(5)).unwrap();
    assert!(a.propose_block(&mut ledger, tx, &mut NoProgress).unwrap().is_some());
    assert_eq!(a.balance(&ledger), Amount::new(45));
}

#[test]
fn third_party_may_propose_anothers_transfer() {
    let mut ledger = ledger_with(NullRandomness::reliable());
    let people = classroom(&mut ledger);
    let (a, b, c) = (&people[0], &people[1], &people[2]);

    let tx = a.create_transaction(b.id(), Amount::new(5)).unwrap();
    let admitted = c.propose_block(&mut ledger, tx, &mut NoProgress).unwrap();
    let block = admitted.expect("valid transfer proposed by a third party");
    assert_eq!(block.proposer, c.id());
    assert_eq!(b.balance(&ledger), Amount::new(15));
}

#[test]
fn vote_on_foreign_block_matches_ledger_view() {
    let mut ledger = ledger_with(NullRandomness::reliable());
    let people = classroom(&mut ledger);
    let (a, b, c) = (&people[0], &people[1], &people[2]);

    let tx = a.create_transaction(b.id(), Amount::new(5)).unwrap();
    let block = a.build_block(&ledger, tx).unwrap();
    let ballot = c.vote(&ledger, &block, &mut NullRandomness::reliable());
    assert!(ballot.approved());
    assert_eq!(ballot.to_string(), "C: APPROVED - block valid and approved");

    let refusal = c.vote(&ledger, &block, &mut NullRandomness::unreliable());
    assert_eq!(refusal.reason, VoteReason::ArbitraryRejection);
}

#[test]
fn corrupted_head_surfaces_as_ledger_error() {
    let mut ledger = ledger_with(NullRandomness::reliable());
    let people = classroom(&mut ledger);
    let (a, b) = (&people[0], &people[1]);

    let tx = a.create_transaction(b.id(), Amount::new(1)).unwrap();
    let mut unsigned = permchain_ledger::Block::new(tx, ledger.head_hash().unwrap(), a.id());
    unsigned.hash = None;
    ledger.append_unchecked(unsigned);

    let tx = a.create_transaction(b.id(), Amount::new(1)).unwrap();
    let err = a.propose_block(&mut ledger, tx, &mut NoProgress).unwrap_err();
    assert!(matches!(
        err,
        ParticipantError::Ledger(LedgerError::ChainCorrupted { .. })
    ));
}
