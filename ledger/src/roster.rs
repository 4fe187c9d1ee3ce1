//! Every participant ever registered, with keys, balances and ban state.
//!
//! Members keep their registration order for life. Banning only clears the
//! `active` flag, so a banned member's balance and position survive until
//! they are unbanned.

use crate::error::{LedgerError, Rejection};
use permchain_types::{Amount, ParticipantId, PublicKey};
use std::collections::HashMap;

/// What a participant hands the ledger when it joins.
#[derive(Clone, Debug)]
pub struct Registration {
    pub id: ParticipantId,
    pub name: String,
    pub public_key: PublicKey,
    pub initial_balance: Amount,
}

/// A roster entry.
#[derive(Clone, Debug)]
pub struct Member {
    pub id: ParticipantId,
    pub name: String,
    pub public_key: PublicKey,
    pub balance: Amount,
    /// Cleared while banned.
    pub active: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Roster {
    members: Vec<Member>,
    index: HashMap<ParticipantId, usize>,
}

impl Roster {
    /// Add or re-activate a member. Returns `true` for a first registration.
    ///
    /// A repeat registration refreshes the name and key and keeps the balance.
    pub fn register(&mut self, registration: Registration) -> bool {
        if let Some(&slot) = self.index.get(&registration.id) {
            let member = &mut self.members[slot];
            member.name = registration.name;
            member.public_key = registration.public_key;
            member.active = true;
            return false;
        }
        self.index.insert(registration.id, self.members.len());
        self.members.push(Member {
            id: registration.id,
            name: registration.name,
            public_key: registration.public_key,
            balance: registration.initial_balance,
            active: true,
        });
        true
    }

    pub fn get(&self, id: &ParticipantId) -> Option<&Member> {
        self.index.get(id).map(|&slot| &self.members[slot])
    }

    fn get_mut(&mut self, id: &ParticipantId) -> Option<&mut Member> {
        self.index.get(id).map(|&slot| &mut self.members[slot])
    }

    pub fn by_name(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }

    /// All members in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    /// Active members in registration order.
    pub fn active(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.active)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn is_active(&self, id: &ParticipantId) -> bool {
        self.get(id).is_some_and(|m| m.active)
    }

    /// Public key of an active member. Banned members have none.
    pub fn public_key(&self, id: &ParticipantId) -> Option<&PublicKey> {
        self.get(id).filter(|m| m.active).map(|m| &m.public_key)
    }

    /// Set the active flag. Returns whether it changed.
    pub fn set_active(&mut self, id: &ParticipantId, active: bool) -> Result<bool, LedgerError> {
        let member = self
            .get_mut(id)
            .ok_or(LedgerError::UnknownParticipant(*id))?;
        let changed = member.active != active;
        member.active = active;
        Ok(changed)
    }

    pub fn total_balance(&self) -> Amount {
        self.members.iter().map(|m| m.balance).sum()
    }

    /// Move `amount` from `sender` to `recipient`. Both must be active.
    ///
    /// Every check runs before either balance is touched.
    pub fn transfer(
        &mut self,
        sender: &ParticipantId,
        recipient: &ParticipantId,
        amount: Amount,
    ) -> Result<(), Rejection> {
        let from = self
            .get(sender)
            .filter(|m| m.active)
            .ok_or(Rejection::InactiveCounterparty(*sender))?;
        let to = self
            .get(recipient)
            .filter(|m| m.active)
            .ok_or(Rejection::InactiveCounterparty(*recipient))?;

        let debited = from
            .balance
            .checked_sub(amount)
            .ok_or(Rejection::InsufficientBalance {
                needed: amount,
                available: from.balance,
            })?;
        if sender == recipient {
            return Ok(());
        }
        let credited = to
            .balance
            .checked_add(amount)
            .ok_or(Rejection::BalanceOverflow(*recipient))?;

        if let Some(m) = self.get_mut(sender) {
            m.balance = debited;
        }
        if let Some(m) = self.get_mut(recipient) {
            m.balance = credited;
        }
        Ok(())
    }
}
