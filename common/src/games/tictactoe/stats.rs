use serde::{Deserialize, Serialize};

use super::types::Outcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
    pub total_games: u32,
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unfinished games are not counted.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::XWon => self.x_wins += 1,
            Outcome::OWon => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => return,
        }
        self.total_games += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tallies_each_outcome() {
        let mut stats = GameStats::new();
        stats.record(Outcome::XWon);
        stats.record(Outcome::Draw);
        stats.record(Outcome::Draw);
        stats.record(Outcome::OWon);
        assert_eq!(
            stats,
            GameStats {
                x_wins: 1,
                o_wins: 1,
                draws: 2,
                total_games: 4,
            }
        );
    }

    #[test]
    fn test_ongoing_is_ignored() {
        let mut stats = GameStats::new();
        stats.record(Outcome::Ongoing);
        assert_eq!(stats, GameStats::default());
    }
}
