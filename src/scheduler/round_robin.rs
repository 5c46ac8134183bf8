//! Greedy round-robin doubles scheduler.
//!
//! # Algorithm
//!
//! 1. Optionally permute the display labels once.
//! 2. For each round, take the next byes from the rotation; everyone else
//!    is available.
//! 3. For each court in ascending order, enumerate every quartet from the
//!    players not yet placed this round, score each against the running
//!    tallies and commit the lowest.
//! 4. If a court cannot be filled, the round stops there and is recorded
//!    with a shortfall; the run continues with the next round.
//!
//! There is no backtracking. The result is fast and usually fair but not
//! optimal, and partner repeats are only avoided while the greedy choice
//! leaves room for it.
//!
//! # Complexity
//! O(R * C * k⁴) where k is the number of players seated per round.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{
    generate_quartets, ByeRotation, FairnessState, QuartetScorer, ScoringWeights, TieBreak,
};
use crate::error::ScheduleError;
use crate::models::{Match, PlayerRoster, Round, Schedule, Shortfall, ShortfallReason};
use crate::validation::validate_request;

/// Players per court.
pub const PLAYERS_PER_COURT: usize = 4;

/// Input for one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Registered players (N).
    pub num_players: usize,
    /// Rounds to generate.
    pub num_rounds: usize,
    /// Courts available each round.
    pub num_courts: usize,
    /// Permute the display labels once before scheduling.
    pub randomize: bool,
}

impl ScheduleRequest {
    /// Creates a request with labels in index order.
    pub fn new(num_players: usize, num_rounds: usize, num_courts: usize) -> Self {
        Self {
            num_players,
            num_rounds,
            num_courts,
            randomize: false,
        }
    }

    /// Sets whether display labels are shuffled.
    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// Players seated per round (`4 * courts`).
    pub fn seats_per_round(&self) -> usize {
        self.num_courts * PLAYERS_PER_COURT
    }

    /// Players sitting out each round.
    pub fn bye_count(&self) -> usize {
        self.num_players.saturating_sub(self.seats_per_round())
    }
}

/// Tuning for the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SchedulerConfig {
    pub weights: ScoringWeights,
    pub tie_break: TieBreak,
}

impl SchedulerConfig {
    /// Sets the scoring weights.
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the tie-break mode.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

/// Greedy doubles scheduler.
///
/// # Example
///
/// ```
/// use doubles_schedule::scheduler::{RoundRobinScheduler, ScheduleRequest};
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let request = ScheduleRequest::new(8, 3, 2);
/// let mut rng = SmallRng::seed_from_u64(42);
///
/// let schedule = RoundRobinScheduler::new().schedule(&request, &mut rng);
/// assert_eq!(schedule.round_count(), 3);
/// assert_eq!(schedule.match_count(), 6);
/// assert!(schedule.partners.max_value(true) <= 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoundRobinScheduler {
    config: SchedulerConfig,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the default weights and jitter tie-break.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler from a config.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Sets the tie-break mode.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.config.tie_break = tie_break;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Validates the request, then schedules it.
    pub fn try_schedule<R: Rng>(
        &self,
        request: &ScheduleRequest,
        rng: &mut R,
    ) -> crate::error::Result<Schedule> {
        validate_request(request).map_err(ScheduleError::InvalidRequest)?;
        Ok(self.schedule(request, rng))
    }

    /// Builds a schedule.
    ///
    /// Does not validate the request. Requests with more seats than players
    /// produce rounds with shortfalls; zero courts produce empty rounds.
    pub fn schedule<R: Rng>(&self, request: &ScheduleRequest, rng: &mut R) -> Schedule {
        let n = request.num_players;
        let num_courts = request.num_courts;

        info!(
            players = n,
            rounds = request.num_rounds,
            courts = num_courts,
            randomize = request.randomize,
            "generating doubles schedule"
        );

        let roster = if request.randomize {
            PlayerRoster::shuffled(n, rng)
        } else {
            PlayerRoster::new(n)
        };

        let scorer = QuartetScorer::new(self.config.weights, self.config.tie_break);
        let mut state = FairnessState::new(n, num_courts);
        let mut byes = ByeRotation::new(n, request.seats_per_round());
        let mut rounds = Vec::with_capacity(request.num_rounds);

        for r in 0..request.num_rounds {
            let round = self.schedule_round(
                r + 1,
                num_courts,
                &roster,
                &scorer,
                &mut state,
                &mut byes,
                rng,
            );
            rounds.push(round);
        }

        let incomplete = rounds.iter().filter(|r| !r.is_complete()).count();
        info!(
            rounds = rounds.len(),
            incomplete_rounds = incomplete,
            max_partner_count = state.partners.max_value(true),
            "schedule generated"
        );

        let (partners, opponents, courts) = state.into_matrices();
        Schedule {
            rounds,
            partners,
            opponents,
            courts,
            player_labels: roster.into_labels(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn schedule_round<R: Rng>(
        &self,
        round_number: usize,
        num_courts: usize,
        roster: &PlayerRoster,
        scorer: &QuartetScorer,
        state: &mut FairnessState,
        byes: &mut ByeRotation,
        rng: &mut R,
    ) -> Round {
        let mut round = Round::new(round_number);

        let bye_indices = byes.next_round();
        let mut on_bye = vec![false; roster.len()];
        for &idx in &bye_indices {
            on_bye[idx] = true;
        }
        round.bye_players = roster.labels_for(&bye_indices);
        round.bye_indices = bye_indices;

        // Players seated this round, ascending; placed players are removed
        let mut pool: Vec<usize> = (0..roster.len()).filter(|&i| !on_bye[i]).collect();

        for court in 0..num_courts {
            if pool.len() < PLAYERS_PER_COURT {
                round.shortfall = Some(Shortfall {
                    first_unfilled_court: court + 1,
                    unfilled_courts: num_courts - court,
                    reason: ShortfallReason::PoolExhausted {
                        remaining: pool.len(),
                    },
                });
                break;
            }

            let candidates = generate_quartets(&pool);
            let Some((quartet, score)) = scorer.select_best(state, &candidates, court, rng) else {
                round.shortfall = Some(Shortfall {
                    first_unfilled_court: court + 1,
                    unfilled_courts: num_courts - court,
                    reason: ShortfallReason::NoCandidate,
                });
                break;
            };

            if state.repeats_partner(&quartet) {
                warn!(
                    round = round_number,
                    court = court + 1,
                    "no candidate avoids a repeated partner; committing best available"
                );
            }

            state.commit(&quartet, court);
            pool.retain(|p| !quartet.players().contains(p));

            let m = Match {
                court: court + 1,
                team_a: [roster.label(quartet.p1), roster.label(quartet.p2)],
                team_b: [roster.label(quartet.p3), roster.label(quartet.p4)],
                quartet,
            };
            debug!(
                round = round_number,
                court = court + 1,
                score = score.total(),
                "committed {m}"
            );
            round.matches.push(m);
        }

        if let Some(shortfall) = &round.shortfall {
            warn!(
                round = round_number,
                first_unfilled_court = shortfall.first_unfilled_court,
                unfilled_courts = shortfall.unfilled_courts,
                "round could not fill every court"
            );
        }
        debug!(
            round = round_number,
            byes = %round.bye_summary(),
            matches = round.matches.len(),
            "round complete"
        );

        round
    }
}

/// Builds a schedule with the default scheduler and the thread-local
/// random source.
///
/// Preconditions (not checked): `num_players >= 4`, `num_courts >= 1`,
/// `4 * num_courts <= num_players`. Use [`validate_request`] or
/// [`RoundRobinScheduler::try_schedule`] to enforce them.
pub fn generate_schedule(
    num_players: usize,
    num_rounds: usize,
    num_courts: usize,
    randomize: bool,
) -> Schedule {
    let request =
        ScheduleRequest::new(num_players, num_rounds, num_courts).with_randomize(randomize);
    RoundRobinScheduler::new().schedule(&request, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Quartet;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn run(request: &ScheduleRequest, seed: u64) -> Schedule {
        let mut rng = SmallRng::seed_from_u64(seed);
        RoundRobinScheduler::new().schedule(request, &mut rng)
    }

    fn run_ordered(request: &ScheduleRequest) -> Schedule {
        let mut rng = SmallRng::seed_from_u64(0);
        RoundRobinScheduler::new()
            .with_tie_break(TieBreak::EnumerationOrder)
            .schedule(request, &mut rng)
    }

    fn assert_symmetric(schedule: &Schedule) {
        assert!(schedule.partners.is_symmetric());
        assert!(schedule.opponents.is_symmetric());
    }

    #[test]
    fn test_eight_players_two_courts() {
        let request = ScheduleRequest::new(8, 3, 2);
        let schedule = run(&request, 42);

        let first = schedule.round(1).unwrap();
        assert!(first.bye_players.is_empty());
        assert_eq!(first.matches.len(), 2);
        let players: HashSet<usize> = first.playing_indices().into_iter().collect();
        assert_eq!(players.len(), 8);

        for round in &schedule.rounds {
            assert_eq!(round.matches.len(), 2);
            assert!(round.is_complete());
        }
        assert!(schedule.partners.max_value(true) <= 1);
        assert_symmetric(&schedule);
    }

    #[test]
    fn test_five_players_bye_sequence() {
        let request = ScheduleRequest::new(5, 5, 1);
        let schedule = run(&request, 1);

        let byes: Vec<Vec<usize>> = schedule.rounds.iter().map(|r| r.bye_indices.clone()).collect();
        assert_eq!(byes, vec![vec![4], vec![3], vec![2], vec![1], vec![0]]);
        // Labels follow indices when not randomized
        let labels: Vec<Vec<u32>> = schedule.rounds.iter().map(|r| r.bye_players.clone()).collect();
        assert_eq!(labels, vec![vec![5], vec![4], vec![3], vec![2], vec![1]]);

        for round in &schedule.rounds {
            assert_eq!(round.matches.len(), 1);
            assert!(!round.playing_indices().contains(&round.bye_indices[0]));
        }
    }

    #[test]
    fn test_four_players_degrade_to_repeat() {
        let request = ScheduleRequest::new(4, 4, 1);
        let schedule = run_ordered(&request);

        let picks: Vec<Quartet> = schedule.rounds.iter().map(|r| r.matches[0].quartet).collect();
        assert_eq!(picks[0], Quartet::new(0, 1, 2, 3));
        assert_eq!(picks[1], Quartet::new(0, 2, 1, 3));
        assert_eq!(picks[2], Quartet::new(0, 3, 1, 2));

        // Round 4 must still produce a match, necessarily repeating partners
        assert_eq!(schedule.rounds[3].matches.len(), 1);
        assert_eq!(schedule.partners.max_value(true), 2);
        assert!(schedule.is_complete());
        assert_symmetric(&schedule);
    }

    #[test]
    fn test_four_players_jitter_still_fills_every_round() {
        let request = ScheduleRequest::new(4, 6, 1);
        let schedule = run(&request, 5);
        assert!(schedule.rounds.iter().all(|r| r.matches.len() == 1));
        // Three rounds cover all three splits exactly once before any repeat
        let first_three: HashSet<_> = schedule.rounds[..3]
            .iter()
            .map(|r| r.matches[0].quartet.split_key())
            .collect();
        assert_eq!(first_three.len(), 3);
    }

    #[test]
    fn test_no_partner_repeat_when_feasible() {
        // Two rounds of partners never box in the third
        let schedule = run(&ScheduleRequest::new(12, 3, 3), 11);
        assert!(schedule.partners.max_value(true) <= 1);
        assert_symmetric(&schedule);
    }

    #[test]
    fn test_court_count_conservation() {
        let request = ScheduleRequest::new(11, 7, 2);
        let schedule = run(&request, 3);

        let mut played = vec![0u32; 11];
        for round in &schedule.rounds {
            for p in round.playing_indices() {
                played[p] += 1;
            }
        }
        assert_eq!(schedule.court_totals(), played);
    }

    #[test]
    fn test_bye_count_conservation() {
        let request = ScheduleRequest::new(10, 9, 2);
        let schedule = run(&request, 8);

        for round in &schedule.rounds {
            assert_eq!(round.bye_indices.len(), 2);
            let distinct: HashSet<_> = round.bye_indices.iter().collect();
            assert_eq!(distinct.len(), 2);
            let playing: HashSet<usize> = round.playing_indices().into_iter().collect();
            assert!(round.bye_indices.iter().all(|b| !playing.contains(b)));
            assert_eq!(playing.len(), 8);
        }
    }

    #[test]
    fn test_matches_use_distinct_players_per_round() {
        let schedule = run(&ScheduleRequest::new(17, 6, 4), 21);
        for round in &schedule.rounds {
            let players = round.playing_indices();
            let distinct: HashSet<_> = players.iter().collect();
            assert_eq!(players.len(), distinct.len());
            let courts: Vec<usize> = round.matches.iter().map(|m| m.court).collect();
            assert_eq!(courts, vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_seeded_runs_identical() {
        let request = ScheduleRequest::new(9, 6, 2).with_randomize(true);
        assert_eq!(run(&request, 77), run(&request, 77));
    }

    #[test]
    fn test_enumeration_order_runs_identical() {
        let request = ScheduleRequest::new(13, 5, 3);
        let a = run_ordered(&request);
        let b = RoundRobinScheduler::new()
            .with_tie_break(TieBreak::EnumerationOrder)
            .schedule(&request, &mut SmallRng::seed_from_u64(999));
        assert_eq!(a, b);
    }

    #[test]
    fn test_randomize_permutes_labels() {
        let request = ScheduleRequest::new(16, 2, 4).with_randomize(true);
        let schedule = run(&request, 4);

        let mut labels = schedule.player_labels.clone();
        labels.sort_unstable();
        assert_eq!(labels, (1..=16).collect::<Vec<u32>>());

        // Match labels are the mapped indices
        for round in &schedule.rounds {
            for m in &round.matches {
                assert_eq!(m.team_a[0], schedule.player_labels[m.quartet.p1]);
                assert_eq!(m.team_b[1], schedule.player_labels[m.quartet.p4]);
            }
        }
    }

    #[test]
    fn test_zero_rounds() {
        let schedule = run(&ScheduleRequest::new(8, 0, 2), 0);
        assert!(schedule.rounds.is_empty());
        assert_eq!(schedule.partners.rows(), 8);
        assert_eq!(schedule.courts.cols(), 2);
        assert!(schedule.court_totals().iter().all(|&t| t == 0));
    }

    #[test]
    fn test_over_capacity_degrades() {
        // Not a valid request, but the scheduler still returns truncated rounds
        let schedule = run(&ScheduleRequest::new(6, 2, 2), 0);
        for round in &schedule.rounds {
            assert_eq!(round.matches.len(), 1);
            let shortfall = round.shortfall.unwrap();
            assert_eq!(shortfall.first_unfilled_court, 2);
            assert_eq!(shortfall.unfilled_courts, 1);
            assert_eq!(shortfall.reason, ShortfallReason::PoolExhausted { remaining: 2 });
        }
    }

    #[test]
    fn test_try_schedule_rejects_invalid() {
        let mut rng = SmallRng::seed_from_u64(0);
        let err = RoundRobinScheduler::new()
            .try_schedule(&ScheduleRequest::new(3, 2, 1), &mut rng)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidRequest(_)));

        let ok = RoundRobinScheduler::new().try_schedule(&ScheduleRequest::new(4, 2, 1), &mut rng);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_enumeration_order_picks() {
        let schedule = run_ordered(&ScheduleRequest::new(8, 4, 2));
        let picks: Vec<Vec<Quartet>> = schedule
            .rounds
            .iter()
            .map(|r| r.matches.iter().map(|m| m.quartet).collect())
            .collect();
        assert_eq!(
            picks,
            vec![
                vec![Quartet::new(0, 1, 2, 3), Quartet::new(4, 5, 6, 7)],
                vec![Quartet::new(0, 2, 4, 6), Quartet::new(1, 3, 5, 7)],
                vec![Quartet::new(0, 4, 1, 5), Quartet::new(2, 6, 3, 7)],
                vec![Quartet::new(0, 3, 4, 7), Quartet::new(1, 2, 5, 6)],
            ]
        );
        assert_eq!(schedule.courts.row(1), &[2, 2]);
        assert!(schedule.court_totals().iter().all(|&t| t == 4));
        assert_eq!(schedule.partners.max_value(true), 1);
    }

    #[test]
    fn test_generate_schedule_entry_point() {
        let schedule = generate_schedule(9, 4, 2, false);
        assert_eq!(schedule.round_count(), 4);
        assert_eq!(schedule.player_labels, (1..=9).collect::<Vec<u32>>());
        assert!(schedule.rounds.iter().all(|r| r.bye_indices.len() == 1));
    }

    #[test]
    fn test_config_from_json() {
        let config: SchedulerConfig = serde_json::from_str(
            r#"{
                "weights": {
                    "partner_penalty": 100000.0,
                    "opponent_weight": 5.0,
                    "court_weight": 1.0,
                    "max_jitter": 0.001
                },
                "tie_break": "EnumerationOrder"
            }"#,
        )
        .unwrap();
        assert_eq!(config.tie_break, TieBreak::EnumerationOrder);
        assert_eq!(config.weights, ScoringWeights::default());
        assert_eq!(RoundRobinScheduler::with_config(config).config(), &config);
    }
}
