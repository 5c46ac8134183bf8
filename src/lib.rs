//! Doubles round-robin scheduling.
//!
//! Assigns `N` players to doubles matches over a number of rounds on a
//! fixed number of courts. Nobody should partner the same player twice,
//! repeated opponents and uneven court use are penalised, and byes rotate
//! when there are more players than seats.
//!
//! # Modules
//!
//! - **`models`**: Result types — `Schedule`, `Round`, `Match`, `Quartet`,
//!   `CountMatrix`, `PlayerRoster`
//! - **`scheduler`**: Quartet generation, scoring, the greedy
//!   `RoundRobinScheduler`, and `FairnessKpi`
//! - **`validation`**: Request checks run before scheduling
//!
//! # Example
//!
//! ```
//! use doubles_schedule::generate_schedule;
//!
//! let schedule = generate_schedule(10, 4, 2, false);
//! assert_eq!(schedule.round_count(), 4);
//! for round in &schedule.rounds {
//!     assert_eq!(round.bye_players.len(), 2);
//!     for m in &round.matches {
//!         println!("Round {} court {}: {m}", round.round_number, m.court);
//!     }
//! }
//! ```
//!
//! # Algorithm
//!
//! A greedy, per-court heuristic: fast and deterministic up to tie-breaks,
//! never a global optimiser. See [`scheduler::RoundRobinScheduler`].

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::ScheduleError;
pub use models::{Match, Round, Schedule};
pub use scheduler::{generate_schedule, RoundRobinScheduler, ScheduleRequest};
