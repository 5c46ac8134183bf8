//! Rotating bye cursor.
//!
//! When a round seats fewer players than are registered, the surplus sits
//! out. The cursor starts at the last index and walks downward, wrapping
//! modulo `N`, taking `bye_count` players per round. There is no
//! rebalancing: when the rotation does not divide evenly over the run some
//! players sit out more often than others.

/// Bye rotation state for one run.
#[derive(Debug, Clone)]
pub struct ByeRotation {
    num_players: usize,
    bye_count: usize,
    cursor: usize,
}

impl ByeRotation {
    /// Creates a rotation for `num_players` players with `seats` places per
    /// round. Any shortfall of seats below zero yields no byes.
    pub fn new(num_players: usize, seats: usize) -> Self {
        Self {
            num_players,
            bye_count: num_players.saturating_sub(seats),
            cursor: num_players.saturating_sub(1),
        }
    }

    /// Players sitting out each round.
    #[inline]
    pub fn bye_count(&self) -> usize {
        self.bye_count
    }

    /// Index the next bye will start from.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Takes the next round's byes and advances the cursor past them.
    pub fn next_round(&mut self) -> Vec<usize> {
        if self.num_players == 0 {
            return Vec::new();
        }
        let mut byes = Vec::with_capacity(self.bye_count);
        for _ in 0..self.bye_count {
            byes.push(self.cursor);
            self.cursor = (self.cursor + self.num_players - 1) % self.num_players;
        }
        byes
    }
}
