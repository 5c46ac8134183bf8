//! Quartet enumeration.
//!
//! Lists every way to put four players from a pool onto one court as two
//! teams of two, each split exactly once.
//!
//! # Order
//! The pool is sorted ascending. Team A pairs `(p1, p2)` are taken in
//! lexicographic order; for each, team B pairs `(p3, p4)` are taken in
//! lexicographic order from the remaining players, keeping only those with
//! `min(p1, p2) < min(p3, p4)`.
//!
//! # Complexity
//! O(k⁴) for a pool of size k. Pools never exceed one round's players.

use crate::models::Quartet;

/// Enumerates the canonical quartets of a pool.
///
/// Returns an empty list when the pool has fewer than four distinct players.
///
/// # Example
///
/// ```
/// use doubles_schedule::scheduler::generate_quartets;
///
/// let quartets = generate_quartets(&[3, 1, 0, 2]);
/// assert_eq!(quartets.len(), 3);
/// assert_eq!(quartets[0].players(), [0, 1, 2, 3]);
/// ```
pub fn generate_quartets(pool: &[usize]) -> Vec<Quartet> {
    let mut sorted = pool.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let k = sorted.len();
    if k < 4 {
        return Vec::new();
    }

    let mut quartets = Vec::new();
    for i in 0..k {
        for j in (i + 1)..k {
            let (p1, p2) = (sorted[i], sorted[j]);
            let remaining: Vec<usize> = sorted
                .iter()
                .copied()
                .filter(|&p| p != p1 && p != p2)
                .collect();

            for a in 0..remaining.len() {
                for b in (a + 1)..remaining.len() {
                    let (p3, p4) = (remaining[a], remaining[b]);
                    // Emit each split once: team A holds the lowest index
                    if p1.min(p2) < p3.min(p4) {
                        quartets.push(Quartet::new(p1, p2, p3, p4));
                    }
                }
            }
        }
    }
    quartets
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_four_players() {
        let q = generate_quartets(&[0, 1, 2, 3]);
        assert_eq!(
            q,
            vec![
                Quartet::new(0, 1, 2, 3),
                Quartet::new(0, 2, 1, 3),
                Quartet::new(0, 3, 1, 2),
            ]
        );
    }

    #[test]
    fn test_too_small_pool() {
        assert!(generate_quartets(&[]).is_empty());
        assert!(generate_quartets(&[0, 1, 2]).is_empty());
        // Duplicates do not count as extra players
        assert!(generate_quartets(&[0, 1, 2, 2]).is_empty());
    }

    #[test]
    fn test_count_matches_formula() {
        // C(k,4) * 3 splits per group of four
        for k in 4..=9usize {
            let pool: Vec<usize> = (0..k).collect();
            let choose4 = k * (k - 1) * (k - 2) * (k - 3) / 24;
            assert_eq!(generate_quartets(&pool).len(), choose4 * 3, "k = {k}");
        }
    }

    #[test]
    fn test_canonical_and_unique() {
        let pool = vec![9, 2, 5, 7, 11, 4];
        let quartets = generate_quartets(&pool);
        let members: HashSet<usize> = pool.iter().copied().collect();

        let mut seen = HashSet::new();
        for q in &quartets {
            assert!(q.is_canonical(), "{q:?}");
            assert!(q.players().iter().all(|p| members.contains(p)));
            let distinct: HashSet<usize> = q.players().into_iter().collect();
            assert_eq!(distinct.len(), 4);
            assert!(seen.insert(q.split_key()), "split emitted twice: {q:?}");
        }
    }

    #[test]
    fn test_order_independent_of_input_order() {
        assert_eq!(
            generate_quartets(&[5, 3, 8, 1, 6]),
            generate_quartets(&[1, 3, 5, 6, 8])
        );
    }

    #[test]
    fn test_enumeration_order() {
        let q = generate_quartets(&[0, 1, 2, 3, 4]);
        // First team A is (0,1); team B pairs follow from {2,3,4}
        assert_eq!(q[0], Quartet::new(0, 1, 2, 3));
        assert_eq!(q[1], Quartet::new(0, 1, 2, 4));
        assert_eq!(q[2], Quartet::new(0, 1, 3, 4));
        assert_eq!(q[3], Quartet::new(0, 2, 1, 3));
    }
}
