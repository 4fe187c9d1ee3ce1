//! Undirected relationship graph built from admitted transfers.

use permchain_types::ParticipantId;
use std::collections::BTreeSet;

/// Who has transacted with whom. Edges are unordered pairs.
#[derive(Clone, Debug, Default)]
pub struct RelationshipGraph {
    edges: BTreeSet<(ParticipantId, ParticipantId)>,
}

fn edge(a: ParticipantId, b: ParticipantId) -> (ParticipantId, ParticipantId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl RelationshipGraph {
    /// Record a transfer between `a` and `b`. Returns whether the edge is new.
    pub fn connect(&mut self, a: ParticipantId, b: ParticipantId) -> bool {
        self.edges.insert(edge(a, b))
    }

    pub fn are_connected(&self, a: ParticipantId, b: ParticipantId) -> bool {
        self.edges.contains(&edge(a, b))
    }

    /// Neighbours of `id`, sorted.
    pub fn connections_of(&self, id: ParticipantId) -> Vec<ParticipantId> {
        self.edges
            .iter()
            .filter_map(|&(a, b)| {
                if a == id {
                    Some(b)
                } else if b == id {
                    Some(a)
                } else {
                    None
                }
            })
            .collect()
    }

    pub fn edges(&self) -> impl Iterator<Item = (ParticipantId, ParticipantId)> + '_ {
        self.edges.iter().copied()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
