//! Round and match records.
//!
//! A round lists who sits out and which quartet plays on each court.
//! Rounds that could not fill every court carry a [`Shortfall`] instead of
//! failing the run.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::player::display_label;
use super::Quartet;

/// One doubles match on one court.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Court number (1-based).
    pub court: usize,
    /// Team A display labels.
    pub team_a: [u32; 2],
    /// Team B display labels.
    pub team_b: [u32; 2],
    /// Internal player indices of the committed quartet.
    pub quartet: Quartet,
}

impl Match {
    /// Whether the given display label plays in this match.
    pub fn involves(&self, label: u32) -> bool {
        self.team_a.contains(&label) || self.team_b.contains(&label)
    }
}

impl fmt::Display for Match {
    /// Formats as `(P1 & P2) vs (P3 & P4)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} & {}) vs ({} & {})",
            display_label(self.team_a[0]),
            display_label(self.team_a[1]),
            display_label(self.team_b[0]),
            display_label(self.team_b[1]),
        )
    }
}

/// Why a round stopped before filling every court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShortfallReason {
    /// Fewer than four unassigned players remained.
    PoolExhausted {
        /// Players still unassigned when the round stopped.
        remaining: usize,
    },
    /// The quartet generator produced no candidate.
    NoCandidate,
}

/// Marks a round that was emitted with fewer matches than courts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    /// First court (1-based) left without a match.
    pub first_unfilled_court: usize,
    /// Number of courts left without a match.
    pub unfilled_courts: usize,
    pub reason: ShortfallReason,
}

/// One round of the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Round number (1-based).
    pub round_number: usize,
    /// Display labels of players on bye, in rotation order.
    pub bye_players: Vec<u32>,
    /// Internal indices of players on bye, parallel to `bye_players`.
    pub bye_indices: Vec<usize>,
    /// Matches in ascending court order.
    pub matches: Vec<Match>,
    /// Set when some courts could not be filled.
    pub shortfall: Option<Shortfall>,
}

impl Round {
    /// Creates an empty round.
    pub fn new(round_number: usize) -> Self {
        Self {
            round_number,
            bye_players: Vec::new(),
            bye_indices: Vec::new(),
            matches: Vec::new(),
            shortfall: None,
        }
    }

    /// Whether every court received a match.
    pub fn is_complete(&self) -> bool {
        self.shortfall.is_none()
    }

    /// Match on the given court (1-based), if one was scheduled.
    pub fn match_on_court(&self, court: usize) -> Option<&Match> {
        self.matches.iter().find(|m| m.court == court)
    }

    /// Comma-separated bye labels (`"P5, P4"`), or `"None"`.
    pub fn bye_summary(&self) -> String {
        if self.bye_players.is_empty() {
            return "None".to_string();
        }
        self.bye_players
            .iter()
            .map(|&label| display_label(label))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Internal indices of every player who played this round.
    pub fn playing_indices(&self) -> Vec<usize> {
        self.matches
            .iter()
            .flat_map(|m| m.quartet.players())
            .collect()
    }
}
