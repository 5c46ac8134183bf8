//! Running fairness tallies for one scheduling run.

use crate::models::{CountMatrix, Quartet};

/// Partner, opponent and court counters, updated as matches are committed.
#[derive(Debug, Clone)]
pub struct FairnessState {
    pub partners: CountMatrix,
    pub opponents: CountMatrix,
    /// Court index is 0-based here.
    pub courts: CountMatrix,
}

impl FairnessState {
    /// Zero-filled tallies for `num_players` players and `num_courts` courts.
    pub fn new(num_players: usize, num_courts: usize) -> Self {
        Self {
            partners: CountMatrix::square(num_players),
            opponents: CountMatrix::square(num_players),
            courts: CountMatrix::new(num_players, num_courts),
        }
    }

    /// Records a quartet playing on `court` (0-based).
    pub fn commit(&mut self, quartet: &Quartet, court: usize) {
        self.partners.increment_pair(quartet.p1, quartet.p2);
        self.partners.increment_pair(quartet.p3, quartet.p4);

        for (a, b) in quartet.opponent_pairs() {
            self.opponents.increment_pair(a, b);
        }

        for p in quartet.players() {
            self.courts.increment(p, court);
        }
    }

    /// Whether either team of the quartet has already partnered.
    pub fn repeats_partner(&self, quartet: &Quartet) -> bool {
        self.partners.get(quartet.p1, quartet.p2) > 0
            || self.partners.get(quartet.p3, quartet.p4) > 0
    }

    /// Consumes the state, returning `(partners, opponents, courts)`.
    pub fn into_matrices(self) -> (CountMatrix, CountMatrix, CountMatrix) {
        (self.partners, self.opponents, self.courts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_updates_all_tallies() {
        let mut state = FairnessState::new(6, 2);
        let q = Quartet::new(0, 4, 1, 5);
        state.commit(&q, 1);

        assert_eq!(state.partners.get(0, 4), 1);
        assert_eq!(state.partners.get(4, 0), 1);
        assert_eq!(state.partners.get(1, 5), 1);
        assert_eq!(state.partners.get(0, 1), 0);

        for (a, b) in [(0, 1), (0, 5), (4, 1), (4, 5)] {
            assert_eq!(state.opponents.get(a, b), 1);
            assert_eq!(state.opponents.get(b, a), 1);
        }
        assert_eq!(state.opponents.get(0, 4), 0);

        for p in [0, 1, 4, 5] {
            assert_eq!(state.courts.get(p, 1), 1);
            assert_eq!(state.courts.get(p, 0), 0);
        }
        assert_eq!(state.courts.row_sum(2), 0);

        assert!(state.partners.is_symmetric());
        assert!(state.opponents.is_symmetric());
    }

    #[test]
    fn test_repeats_partner() {
        let mut state = FairnessState::new(4, 1);
        let q = Quartet::new(0, 1, 2, 3);
        assert!(!state.repeats_partner(&q));
        state.commit(&q, 0);
        assert!(state.repeats_partner(&q));
        assert!(!state.repeats_partner(&Quartet::new(0, 2, 1, 3)));
    }
}
