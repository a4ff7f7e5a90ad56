use crate::game::{GameResult, Player};

/// Win/loss/draw tally from the human player's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionStats {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game. In-progress results are ignored.
    pub fn record(&mut self, result: GameResult, perspective: Player) {
        match result {
            GameResult::Win(winner) if winner == perspective => self.wins += 1,
            GameResult::Win(_) => self.losses += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::InProgress => {}
        }
    }

    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Fraction of finished games won.
    pub fn win_rate(&self) -> f32 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.wins as f32 / total as f32
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_perspective() {
        let mut stats = SessionStats::new();
        stats.record(GameResult::Win(Player::Red), Player::Red);
        stats.record(GameResult::Win(Player::Yellow), Player::Red);
        stats.record(GameResult::Draw, Player::Red);
        stats.record(GameResult::InProgress, Player::Red);

        assert_eq!(
            stats,
            SessionStats {
                wins: 1,
                losses: 1,
                draws: 1
            }
        );
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_win_rate() {
        let mut stats = SessionStats::new();
        assert_eq!(stats.win_rate(), 0.0);
        stats.record(GameResult::Win(Player::Yellow), Player::Yellow);
        stats.record(GameResult::Draw, Player::Yellow);
        assert!((stats.win_rate() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_reset() {
        let mut stats = SessionStats {
            wins: 4,
            losses: 2,
            draws: 1,
        };
        stats.reset();
        assert_eq!(stats, SessionStats::default());
    }

    #[test]
    fn test_stats_serde() {
        let stats = SessionStats {
            wins: 3,
            losses: 1,
            draws: 0,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"wins":3,"losses":1,"draws":0}"#);
        let restored: SessionStats = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, stats);
    }
}
