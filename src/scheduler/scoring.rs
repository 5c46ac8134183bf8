//! Quartet scoring.
//!
//! Lower is better. A candidate quartet for a given court scores
//!
//! ```text
//! partner_penalty * ([p1,p2 partnered before] + [p3,p4 partnered before])
//!   + opponent_weight * Σ opponents[a][b]²   over the four cross pairs
//!   + court_weight    * Σ courts[p][court]   over the four players
//!   + jitter ∈ [0, max_jitter)                (TieBreak::Jitter only)
//! ```
//!
//! The partner penalty dwarfs the other terms, so a repeat partnership is
//! only chosen when every candidate repeats one. Opponent repeats are
//! squared so second and later repeats cost more than first ones; court
//! usage is linear.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::FairnessState;
use crate::models::Quartet;

/// Default penalty for each team that has partnered before.
pub const PARTNER_PENALTY: f64 = 100_000.0;
/// Default weight on squared opponent repeats.
pub const OPPONENT_WEIGHT: f64 = 5.0;
/// Default weight on prior use of the court.
pub const COURT_WEIGHT: f64 = 1.0;
/// Default upper bound (exclusive) of the tie-break jitter.
pub const MAX_JITTER: f64 = 0.001;

/// Weights of the scoring terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub partner_penalty: f64,
    pub opponent_weight: f64,
    pub court_weight: f64,
    /// Jitter is drawn uniformly from `[0, max_jitter)`.
    pub max_jitter: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            partner_penalty: PARTNER_PENALTY,
            opponent_weight: OPPONENT_WEIGHT,
            court_weight: COURT_WEIGHT,
            max_jitter: MAX_JITTER,
        }
    }
}

impl ScoringWeights {
    /// Sets the partner penalty.
    pub fn with_partner_penalty(mut self, penalty: f64) -> Self {
        self.partner_penalty = penalty;
        self
    }

    /// Sets the opponent weight.
    pub fn with_opponent_weight(mut self, weight: f64) -> Self {
        self.opponent_weight = weight;
        self
    }

    /// Sets the court weight.
    pub fn with_court_weight(mut self, weight: f64) -> Self {
        self.court_weight = weight;
        self
    }

    /// Sets the jitter bound.
    pub fn with_max_jitter(mut self, max_jitter: f64) -> Self {
        self.max_jitter = max_jitter;
        self
    }
}

/// How exact score ties between candidates are broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieBreak {
    /// Add a small uniform random value to every score.
    #[default]
    Jitter,
    /// No jitter; the first candidate in enumeration order wins.
    EnumerationOrder,
}

/// Per-term breakdown of a quartet's score (weights already applied).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreBreakdown {
    pub partner: f64,
    pub opponent: f64,
    pub court: f64,
    pub jitter: f64,
}

impl ScoreBreakdown {
    /// Sum of all terms.
    #[inline]
    pub fn total(&self) -> f64 {
        self.partner + self.opponent + self.court + self.jitter
    }
}

/// Scores candidate quartets against the running tallies.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuartetScorer {
    weights: ScoringWeights,
    tie_break: TieBreak,
}

impl QuartetScorer {
    pub fn new(weights: ScoringWeights, tie_break: TieBreak) -> Self {
        Self { weights, tie_break }
    }

    /// Deterministic part of the score for `quartet` on `court` (0-based).
    pub fn breakdown(
        &self,
        state: &FairnessState,
        quartet: &Quartet,
        court: usize,
    ) -> ScoreBreakdown {
        let mut repeated_teams = 0u32;
        if state.partners.get(quartet.p1, quartet.p2) > 0 {
            repeated_teams += 1;
        }
        if state.partners.get(quartet.p3, quartet.p4) > 0 {
            repeated_teams += 1;
        }

        let opponent_sq: u64 = quartet
            .opponent_pairs()
            .iter()
            .map(|&(a, b)| {
                let n = u64::from(state.opponents.get(a, b));
                n * n
            })
            .sum();

        let court_use: u64 = quartet
            .players()
            .iter()
            .map(|&p| u64::from(state.courts.get(p, court)))
            .sum();

        ScoreBreakdown {
            partner: self.weights.partner_penalty * f64::from(repeated_teams),
            opponent: self.weights.opponent_weight * opponent_sq as f64,
            court: self.weights.court_weight * court_use as f64,
            jitter: 0.0,
        }
    }

    /// Full score, including jitter when the tie-break calls for it.
    pub fn score<R: Rng>(
        &self,
        state: &FairnessState,
        quartet: &Quartet,
        court: usize,
        rng: &mut R,
    ) -> ScoreBreakdown {
        let mut breakdown = self.breakdown(state, quartet, court);
        if self.tie_break == TieBreak::Jitter && self.weights.max_jitter > 0.0 {
            breakdown.jitter = rng.random::<f64>() * self.weights.max_jitter;
        }
        breakdown
    }

    /// Lowest-scoring candidate, with its score. Strict `<`, so among equal
    /// scores the earliest candidate is kept.
    pub fn select_best<R: Rng>(
        &self,
        state: &FairnessState,
        candidates: &[Quartet],
        court: usize,
        rng: &mut R,
    ) -> Option<(Quartet, ScoreBreakdown)> {
        let mut best: Option<(Quartet, ScoreBreakdown)> = None;
        for quartet in candidates {
            let score = self.score(state, quartet, court, rng);
            let better = match &best {
                Some((_, current)) => score.total() < current.total(),
                None => true,
            };
            if better {
                best = Some((*quartet, score));
            }
        }
        best
    }
}
