//! Schedule (result) model.
//!
//! A schedule is the complete output of one run: every round, the three
//! fairness matrices accumulated while building them, and the label array
//! that maps internal player indices to display labels. It is plain data
//! and is handed as-is to whatever renders it.

use serde::{Deserialize, Serialize};

use super::player::display_label;
use super::{CountMatrix, Match, Round};

/// Output of a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Rounds in order.
    pub rounds: Vec<Round>,
    /// `N×N` teammate counts.
    pub partners: CountMatrix,
    /// `N×N` opposing-team counts.
    pub opponents: CountMatrix,
    /// `N×C` per-court appearance counts.
    pub courts: CountMatrix,
    /// Display label of each player index.
    pub player_labels: Vec<u32>,
}

impl Schedule {
    /// Number of players.
    pub fn num_players(&self) -> usize {
        self.player_labels.len()
    }

    /// Number of courts.
    pub fn num_courts(&self) -> usize {
        self.courts.cols()
    }

    /// Number of rounds.
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Round by 1-based number.
    pub fn round(&self, round_number: usize) -> Option<&Round> {
        round_number
            .checked_sub(1)
            .and_then(|idx| self.rounds.get(idx))
    }

    /// Match on a court (1-based) in a round (1-based).
    pub fn match_for_court(&self, round_number: usize, court: usize) -> Option<&Match> {
        self.round(round_number)?.match_on_court(court)
    }

    /// Total matches across all rounds.
    pub fn match_count(&self) -> usize {
        self.rounds.iter().map(|r| r.matches.len()).sum()
    }

    /// Whether every round filled every court.
    pub fn is_complete(&self) -> bool {
        self.rounds.iter().all(Round::is_complete)
    }

    /// Rounds that were emitted with unfilled courts.
    pub fn incomplete_rounds(&self) -> Vec<&Round> {
        self.rounds.iter().filter(|r| !r.is_complete()).collect()
    }

    /// Display string (`"P3"`) of a player index.
    pub fn player_display(&self, index: usize) -> String {
        display_label(self.player_labels[index])
    }

    /// Court appearances per player (row sums of the court matrix).
    pub fn court_totals(&self) -> Vec<u32> {
        (0..self.courts.rows())
            .map(|i| self.courts.row_sum(i))
            .collect()
    }

    /// Rounds each player sat out, indexed by player.
    pub fn bye_counts(&self) -> Vec<u32> {
        let mut counts = vec![0; self.num_players()];
        for round in &self.rounds {
            for &idx in &round.bye_indices {
                counts[idx] += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Quartet, Shortfall, ShortfallReason};

    fn sample_schedule() -> Schedule {
        let mut courts = CountMatrix::new(5, 1);
        let q = Quartet::new(0, 1, 2, 3);
        for p in q.players() {
            courts.increment(p, 0);
        }

        let mut r1 = Round::new(1);
        r1.bye_players = vec![5];
        r1.bye_indices = vec![4];
        r1.matches.push(Match {
            court: 1,
            team_a: [1, 2],
            team_b: [3, 4],
            quartet: q,
        });

        let mut r2 = Round::new(2);
        r2.bye_players = vec![4];
        r2.bye_indices = vec![3];
        r2.shortfall = Some(Shortfall {
            first_unfilled_court: 1,
            unfilled_courts: 1,
            reason: ShortfallReason::NoCandidate,
        });

        Schedule {
            rounds: vec![r1, r2],
            partners: CountMatrix::square(5),
            opponents: CountMatrix::square(5),
            courts,
            player_labels: vec![1, 2, 3, 4, 5],
        }
    }

    #[test]
    fn test_round_lookup() {
        let s = sample_schedule();
        assert_eq!(s.round(1).map(|r| r.round_number), Some(1));
        assert!(s.round(0).is_none());
        assert!(s.round(3).is_none());
        assert!(s.match_for_court(1, 1).is_some());
        assert!(s.match_for_court(2, 1).is_none());
    }

    #[test]
    fn test_counts() {
        let s = sample_schedule();
        assert_eq!(s.num_players(), 5);
        assert_eq!(s.num_courts(), 1);
        assert_eq!(s.match_count(), 1);
        assert_eq!(s.court_totals(), vec![1, 1, 1, 1, 0]);
        assert_eq!(s.bye_counts(), vec![0, 0, 0, 1, 1]);
    }

    #[test]
    fn test_incomplete_rounds() {
        let s = sample_schedule();
        assert!(!s.is_complete());
        let incomplete = s.incomplete_rounds();
        assert_eq!(incomplete.len(), 1);
        assert_eq!(incomplete[0].round_number, 2);
    }

    #[test]
    fn test_player_display() {
        let s = sample_schedule();
        assert_eq!(s.player_display(4), "P5");
    }

    #[test]
    fn test_serializes_to_json() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"round_number\":1"));
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
