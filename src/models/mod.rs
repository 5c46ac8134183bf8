//! Doubles scheduling domain models.
//!
//! Provides the data types for a doubles round-robin run and its result.
//!
//! # Types
//!
//! | Type | Meaning |
//! |------|---------|
//! | `PlayerRoster` | Player index → display label |
//! | `Quartet` | Candidate split of four players into two teams |
//! | `Match` | Committed quartet on one court |
//! | `Round` | Byes plus matches for one round |
//! | `CountMatrix` | Partner / opponent / court tallies |
//! | `Schedule` | All rounds plus the final tallies |

mod matrix;
mod player;
mod quartet;
mod round;
mod schedule;

pub use matrix::CountMatrix;
pub use player::{display_label, PlayerRoster};
pub use quartet::Quartet;
pub use round::{Match, Round, Shortfall, ShortfallReason};
pub use schedule::Schedule;
