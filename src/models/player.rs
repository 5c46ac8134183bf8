//! Player roster.
//!
//! Players are addressed internally by a stable index `0..N-1`. The roster
//! maps each index to a 1-based display label, which may be permuted once
//! at the start of a run.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Index → display label mapping for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRoster {
    labels: Vec<u32>,
}

impl PlayerRoster {
    /// Creates a roster with labels `1..=num_players` in index order.
    pub fn new(num_players: usize) -> Self {
        Self {
            labels: (1..=num_players as u32).collect(),
        }
    }

    /// Creates a roster whose labels are uniformly permuted (Fisher–Yates).
    pub fn shuffled<R: Rng>(num_players: usize, rng: &mut R) -> Self {
        let mut roster = Self::new(num_players);
        roster.labels.shuffle(rng);
        roster
    }

    /// Number of players.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the roster is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Display label of a player index.
    #[inline]
    pub fn label(&self, index: usize) -> u32 {
        debug_assert!(index < self.labels.len(), "player index {index} out of range");
        self.labels[index]
    }

    /// Labels for several indices, in the given order.
    pub fn labels_for(&self, indices: &[usize]) -> Vec<u32> {
        indices.iter().map(|&i| self.label(i)).collect()
    }

    /// All labels in index order.
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Consumes the roster, returning the label array.
    pub fn into_labels(self) -> Vec<u32> {
        self.labels
    }
}

/// Human-readable form of a display label (`"P7"`).
pub fn display_label(label: u32) -> String {
    format!("P{label}")
}
