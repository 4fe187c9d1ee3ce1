//! Drives a ledger through a configured scenario.

use crate::config::{SimConfig, Step};
use anyhow::{anyhow, Context};
use permchain_ledger::{Ledger, LedgerSummary};
use permchain_participant::Participant;
use permchain_types::Amount;
use serde::Serialize;

/// Final state after all steps ran.
#[derive(Debug, Serialize)]
pub struct ScenarioReport {
    pub admitted: usize,
    pub rejected: usize,
    pub integrity_ok: bool,
    pub summary: LedgerSummary,
    pub balances: Vec<BalanceLine>,
}

#[derive(Debug, Serialize)]
pub struct BalanceLine {
    pub name: String,
    pub balance: Amount,
    pub active: bool,
    pub connections: usize,
}

/// Create the configured participants on `ledger` and run every step.
///
/// Rejected transfers are counted, not treated as failures. Unknown names
/// and invalid amounts abort the run.
pub fn run(config: &SimConfig, ledger: &mut Ledger) -> anyhow::Result<ScenarioReport> {
    let mut people = Vec::with_capacity(config.participants.len());
    for spec in &config.participants {
        let participant = Participant::new(&spec.name, ledger, Amount::new(spec.balance.into()))
            .with_context(|| format!("creating participant {}", spec.name))?;
        tracing::info!(
            name = %spec.name,
            id = %participant.id().short(),
            key_bits = participant.key_bits(),
            balance = spec.balance,
            "participant joined"
        );
        people.push(participant);
    }

    let find = |name: &str| {
        people
            .iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| anyhow!("unknown participant {name:?}"))
    };

    let mut admitted = 0;
    let mut rejected = 0;
    let mut progress = |message: &str| tracing::info!(target: "permchain::progress", "{message}");

    for (index, step) in config.steps.iter().enumerate() {
        match step {
            Step::Transfer { from, to, amount } => {
                let sender = find(from)?;
                let recipient = find(to)?;
                let tx = sender
                    .create_transaction(recipient.id(), Amount::new((*amount).into()))
                    .with_context(|| format!("step {index}: building transfer"))?;
                match sender.propose_block(ledger, tx, &mut progress)? {
                    Some(block) => {
                        admitted += 1;
                        tracing::info!(
                            step = index,
                            block = %block.id,
                            %from,
                            %to,
                            amount,
                            "transfer admitted"
                        );
                    }
                    None => {
                        rejected += 1;
                        tracing::warn!(step = index, %from, %to, amount, "transfer rejected");
                    }
                }
            }
            Step::Ban { name } => {
                let id = find(name)?.id();
                ledger.ban(&id)?;
            }
            Step::Unban { name } => {
                let id = find(name)?.id();
                ledger.unban(&id)?;
            }
        }
    }

    let integrity_ok = match ledger.verify_integrity() {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(error = %err, "integrity check failed");
            false
        }
    };

    let balances = ledger
        .participants()
        .map(|member| BalanceLine {
            name: member.name.clone(),
            balance: member.balance,
            active: member.active,
            connections: ledger.connections_of(&member.id).len(),
        })
        .collect();

    Ok(ScenarioReport {
        admitted,
        rejected,
        integrity_ok,
        summary: ledger.summary(),
        balances,
    })
}
