//! Schedule fairness metrics (KPIs).
//!
//! Summarises a finished schedule's partner, opponent, court and bye
//! distribution so callers can judge or compare runs.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Max partner count | Most rounds any pair spent as teammates |
//! | Repeated partner pairs | Pairs teamed more than once |
//! | Max opponent count | Most rounds any pair spent facing each other |
//! | Repeated opponent pairs | Pairs opposed more than once |
//! | Court spread | Largest per-player gap between most- and least-used court |
//! | Bye spread | Gap between the most and fewest byes any player had |
//! | Unfilled courts | Court slots left empty across all rounds |

use crate::models::Schedule;

/// Fairness indicators of a schedule.
#[derive(Debug, Clone)]
pub struct FairnessKpi {
    /// Largest off-diagonal partner count.
    pub max_partner_count: u32,
    /// Unordered pairs that partnered more than once.
    pub repeated_partner_pairs: usize,
    /// Largest off-diagonal opponent count.
    pub max_opponent_count: u32,
    /// Unordered pairs that opposed more than once.
    pub repeated_opponent_pairs: usize,
    /// Matches played per player (court matrix row sums).
    pub matches_per_player: Vec<u32>,
    /// Largest per-player (max court use − min court use).
    pub court_spread: u32,
    /// Byes per player.
    pub byes_per_player: Vec<u32>,
    /// Max − min byes across players.
    pub bye_spread: u32,
    /// Total matches played.
    pub total_matches: usize,
    /// Court slots left empty by shortfalls.
    pub unfilled_courts: usize,
}

impl FairnessKpi {
    /// Computes KPIs from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let court_spread = schedule
            .courts
            .iter_rows()
            .map(|row| {
                let max = row.iter().copied().max().unwrap_or(0);
                let min = row.iter().copied().min().unwrap_or(0);
                max - min
            })
            .max()
            .unwrap_or(0);

        let byes_per_player = schedule.bye_counts();
        let bye_spread = match (byes_per_player.iter().max(), byes_per_player.iter().min()) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        };

        let unfilled_courts = schedule
            .rounds
            .iter()
            .filter_map(|r| r.shortfall.map(|s| s.unfilled_courts))
            .sum();

        Self {
            max_partner_count: schedule.partners.max_value(true),
            repeated_partner_pairs: schedule.partners.pairs_above(1).len(),
            max_opponent_count: schedule.opponents.max_value(true),
            repeated_opponent_pairs: schedule.opponents.pairs_above(1).len(),
            matches_per_player: schedule.court_totals(),
            court_spread,
            byes_per_player,
            bye_spread,
            total_matches: schedule.match_count(),
            unfilled_courts,
        }
    }

    /// Whether nobody partnered the same player twice.
    pub fn partners_unique(&self) -> bool {
        self.max_partner_count <= 1
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_repeated_partner_pairs: usize, max_bye_spread: u32) -> bool {
        self.repeated_partner_pairs <= max_repeated_partner_pairs
            && self.bye_spread <= max_bye_spread
    }
}
