//! Greedy doubles scheduler and fairness evaluation.
//!
//! # Components
//!
//! - **Quartet generation**: every canonical split of a player pool into
//!   two teams of two (`generate_quartets`).
//! - **Bye rotation**: a downward-walking cursor that picks who sits out
//!   (`ByeRotation`).
//! - **Scoring**: partner / opponent / court penalties against running
//!   tallies (`QuartetScorer`).
//! - **Scheduler**: round-by-round, court-by-court greedy assignment
//!   (`RoundRobinScheduler`, `generate_schedule`).
//!
//! # KPI
//!
//! `FairnessKpi` summarises partner, opponent, court and bye balance of a
//! finished schedule.

mod byes;
mod kpi;
mod quartets;
mod round_robin;
mod scoring;
mod state;

pub use byes::ByeRotation;
pub use kpi::FairnessKpi;
pub use quartets::generate_quartets;
pub use round_robin::{
    generate_schedule, RoundRobinScheduler, ScheduleRequest, SchedulerConfig, PLAYERS_PER_COURT,
};
pub use scoring::{
    QuartetScorer, ScoreBreakdown, ScoringWeights, TieBreak, COURT_WEIGHT, MAX_JITTER,
    OPPONENT_WEIGHT, PARTNER_PENALTY,
};
pub use state::FairnessState;
