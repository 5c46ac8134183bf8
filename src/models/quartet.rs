//! Quartet: one candidate court assignment.

use serde::{Deserialize, Serialize};

/// Four distinct players split into two teams of two.
///
/// `(p1, p2)` is team A and `(p3, p4)` is team B. Quartets produced by the
/// generator satisfy `p1 < p2`, `p3 < p4` and `p1 < p3`, so every unordered
/// split of four players appears exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quartet {
    pub p1: usize,
    pub p2: usize,
    pub p3: usize,
    pub p4: usize,
}

impl Quartet {
    /// Creates a quartet from team A `(p1, p2)` and team B `(p3, p4)`.
    pub fn new(p1: usize, p2: usize, p3: usize, p4: usize) -> Self {
        Self { p1, p2, p3, p4 }
    }

    /// Team A indices.
    #[inline]
    pub fn team_a(&self) -> [usize; 2] {
        [self.p1, self.p2]
    }

    /// Team B indices.
    #[inline]
    pub fn team_b(&self) -> [usize; 2] {
        [self.p3, self.p4]
    }

    /// All four players, team A first.
    #[inline]
    pub fn players(&self) -> [usize; 4] {
        [self.p1, self.p2, self.p3, self.p4]
    }

    /// The four cross-team (opponent) pairs.
    pub fn opponent_pairs(&self) -> [(usize, usize); 4] {
        [
            (self.p1, self.p3),
            (self.p1, self.p4),
            (self.p2, self.p3),
            (self.p2, self.p4),
        ]
    }

    /// Whether the quartet satisfies the canonical ordering rule.
    pub fn is_canonical(&self) -> bool {
        self.p1 < self.p2 && self.p3 < self.p4 && self.p1.min(self.p2) < self.p3.min(self.p4)
    }

    /// Order-independent identity of the split: the two teams as sorted
    /// pairs, lower team first.
    pub fn split_key(&self) -> ((usize, usize), (usize, usize)) {
        let a = (self.p1.min(self.p2), self.p1.max(self.p2));
        let b = (self.p3.min(self.p4), self.p3.max(self.p4));
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}
