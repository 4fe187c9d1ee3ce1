//! The ledger: chain, roster and relationship graph behind one admission
//! pipeline.

use crate::audit::{AdmissionOutcome, AdmissionRecord, AuditLog};
use crate::block::Block;
use crate::chain::Chain;
use crate::error::{LedgerError, Rejection};
use crate::graph::RelationshipGraph;
use crate::roster::{Member, Registration, Roster};
use crate::vote::{evaluate, LedgerView};
use permchain_consensus::{poll, Ballot, ProgressSink, SeededRandomness, Tally, VoteRandomness};
use permchain_types::{Amount, BlockHash, LedgerParams, ParticipantId, PublicKey};
use serde::Serialize;

/// Headline figures for dashboards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub blocks: usize,
    pub active: usize,
    pub banned: usize,
    /// Undirected participant pairs that have transacted.
    pub connections: usize,
    pub total_balance: Amount,
}

pub struct Ledger {
    params: LedgerParams,
    chain: Chain,
    roster: Roster,
    graph: RelationshipGraph,
    randomness: Box<dyn VoteRandomness>,
    audit: AuditLog,
}

impl Ledger {
    /// A ledger holding only the genesis block, with entropy-seeded voters.
    pub fn new(params: LedgerParams) -> Result<Self, LedgerError> {
        let randomness = SeededRandomness::from_params(&params, None)?;
        Ok(Self::with_randomness(params, randomness))
    }

    /// Like [`Ledger::new`], with reproducible voter behaviour.
    pub fn seeded(params: LedgerParams, seed: u64) -> Result<Self, LedgerError> {
        let randomness = SeededRandomness::from_params(&params, Some(seed))?;
        Ok(Self::with_randomness(params, randomness))
    }

    pub fn with_randomness(
        params: LedgerParams,
        randomness: impl VoteRandomness + 'static,
    ) -> Self {
        let audit = AuditLog::new(params.audit_log_capacity);
        tracing::debug!(randomness = randomness.name(), "ledger created");
        Self {
            params,
            chain: Chain::with_genesis(),
            roster: Roster::default(),
            graph: RelationshipGraph::default(),
            randomness: Box::new(randomness),
            audit,
        }
    }

    pub fn params(&self) -> &LedgerParams {
        &self.params
    }

    // ── Roster ──────────────────────────────────────────────────────────

    /// Record a participant's key, name and opening balance and make them
    /// active. Registering again refreshes name and key and keeps the balance.
    pub fn register_participant(&mut self, registration: Registration) -> bool {
        let (id, name) = (registration.id, registration.name.clone());
        let fresh = self.roster.register(registration);
        tracing::info!(participant = %id, %name, fresh, "participant registered");
        fresh
    }

    /// Remove a participant from the voter set and key registry.
    /// Returns `false` if they were already banned.
    pub fn ban(&mut self, id: &ParticipantId) -> Result<bool, LedgerError> {
        let changed = self.roster.set_active(id, false)?;
        if changed {
            tracing::info!(participant = %id, "participant banned");
        }
        Ok(changed)
    }

    /// Restore a banned participant. Returns `false` if they were active.
    pub fn unban(&mut self, id: &ParticipantId) -> Result<bool, LedgerError> {
        let changed = self.roster.set_active(id, true)?;
        if changed {
            tracing::info!(participant = %id, "participant unbanned");
        }
        Ok(changed)
    }

    pub fn participant(&self, id: &ParticipantId) -> Option<&Member> {
        self.roster.get(id)
    }

    pub fn participant_by_name(&self, name: &str) -> Option<&Member> {
        self.roster.by_name(name)
    }

    /// Every participant ever registered, active or banned, in registration order.
    pub fn participants(&self) -> impl Iterator<Item = &Member> {
        self.roster.iter()
    }

    pub fn is_active(&self, id: &ParticipantId) -> bool {
        self.roster.is_active(id)
    }

    /// Public key of an active participant.
    pub fn public_key(&self, id: &ParticipantId) -> Option<&PublicKey> {
        self.roster.public_key(id)
    }

    pub fn balance_of(&self, id: &ParticipantId) -> Option<Amount> {
        self.roster.get(id).map(|m| m.balance)
    }

    // ── Chain ───────────────────────────────────────────────────────────

    pub fn blocks(&self) -> &[Block] {
        self.chain.blocks()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn head(&self) -> Result<&Block, LedgerError> {
        self.chain.head()
    }

    pub fn head_hash(&self) -> Result<BlockHash, LedgerError> {
        self.chain.head_hash()
    }

    /// What a voter sees when judging a block.
    pub fn view(&self) -> LedgerView<'_> {
        LedgerView::new(&self.chain, &self.roster)
    }

    pub fn verify_integrity(&self) -> Result<(), LedgerError> {
        let result = self.chain.verify_integrity();
        if let Err(err) = &result {
            tracing::warn!(error = %err, "ledger integrity check failed");
        }
        result
    }

    /// Append `block` with no quorum, vote, settlement or graph update.
    ///
    /// For importing pre-validated history and for exercising the integrity
    /// check against hand-built chains.
    pub fn append_unchecked(&mut self, block: Block) {
        tracing::warn!(block = %block.id, "block appended without admission");
        self.chain.push(block);
    }

    // ── Graph ───────────────────────────────────────────────────────────

    pub fn relationships(&self) -> &RelationshipGraph {
        &self.graph
    }

    pub fn connections_of(&self, id: &ParticipantId) -> Vec<ParticipantId> {
        self.graph.connections_of(*id)
    }

    // ── Reporting ───────────────────────────────────────────────────────

    pub fn summary(&self) -> LedgerSummary {
        let active = self.roster.active_count();
        LedgerSummary {
            blocks: self.chain.len(),
            active,
            banned: self.roster.len() - active,
            connections: self.graph.edge_count(),
            total_balance: self.roster.total_balance(),
        }
    }

    /// Recent admission attempts, oldest first.
    pub fn audit_log(&self) -> &AuditLog {
        &self.audit
    }

    // ── Admission ───────────────────────────────────────────────────────

    /// Run `block` through quorum, vote, settlement and append.
    ///
    /// On rejection nothing is changed apart from the audit log.
    pub fn admit_block(
        &mut self,
        block: Block,
        progress: &mut dyn ProgressSink,
    ) -> Result<&Block, Rejection> {
        match self.decide(&block, progress) {
            Ok(tally) => {
                let tx = &block.transaction;
                if !tx.is_genesis() {
                    self.graph.connect(tx.sender, tx.recipient);
                }
                tracing::info!(
                    block = %block.id,
                    proposer = %block.proposer,
                    height = self.chain.len(),
                    approvals = tally.approvals(),
                    "block admitted"
                );
                let height = self.chain.len();
                progress.notify(&format!("block {} appended at height {height}", block.id));
                self.audit
                    .record(AdmissionRecord::new(&block, AdmissionOutcome::Admitted { tally }));
                Ok(self.chain.push(block))
            }
            Err(rejection) => {
                tracing::warn!(
                    block = %block.id,
                    proposer = %block.proposer,
                    %rejection,
                    "block rejected"
                );
                progress.notify(&format!("block rejected: {rejection}"));
                self.audit.record(AdmissionRecord::new(
                    &block,
                    AdmissionOutcome::Rejected(rejection.clone()),
                ));
                Err(rejection)
            }
        }
    }

    /// Quorum, vote and settlement. Settles balances only on success.
    fn decide(
        &mut self,
        block: &Block,
        progress: &mut dyn ProgressSink,
    ) -> Result<Tally, Rejection> {
        let active = self.roster.active_count();
        let required = self.params.min_active_participants;
        if active < required {
            return Err(Rejection::NoQuorum { active, required });
        }

        let tally = self.hold_vote(block, progress);
        if !tally.is_met() {
            return Err(Rejection::ConsensusRejected { tally });
        }
        progress.notify(&format!("consensus reached: {tally}"));

        let tx = &block.transaction;
        if !tx.is_genesis() {
            self.roster.transfer(&tx.sender, &tx.recipient, tx.amount)?;
            let sender = self.roster.get(&tx.sender).map(|m| m.name.as_str()).unwrap_or("?");
            let recipient = self.roster.get(&tx.recipient).map(|m| m.name.as_str()).unwrap_or("?");
            progress.notify(&format!(
                "balances updated: {sender} (-{amount}) -> {recipient} (+{amount})",
                amount = tx.amount
            ));
        }
        Ok(tally)
    }

    /// Poll every active participant except the proposer, in roster order.
    fn hold_vote(&mut self, block: &Block, progress: &mut dyn ProgressSink) -> Tally {
        let view = LedgerView::new(&self.chain, &self.roster);
        let randomness = self.randomness.as_mut();
        let voters: Vec<&Member> = self
            .roster
            .active()
            .filter(|m| m.id != block.proposer)
            .collect();

        let required = self.params.approval_policy.required(voters.len());
        progress.notify(&format!(
            "starting consensus with {} voting participants",
            voters.len()
        ));
        progress.notify(&format!("{required} favourable votes required for approval"));

        poll(&voters, self.params.approval_policy, |voter| {
            progress.notify(&format!("{} is reviewing the block...", voter.name));
            let reason = evaluate(&view, block, randomness);
            let ballot = Ballot::new(voter.id, voter.name.clone(), reason);
            progress.notify(&ballot.to_string());
            ballot
        })
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("blocks", &self.chain.len())
            .field("participants", &self.roster.len())
            .field("randomness", &self.randomness.name())
            .finish()
    }
}
