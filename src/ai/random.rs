use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::SearchError;
use crate::game::{Board, Player};

use super::agent::Agent;

/// An agent that selects uniformly at random from legal actions.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _player: Player) -> Result<usize, SearchError> {
        let actions = board.legal_moves();
        if actions.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }
        let idx = self.rng.random_range(0..actions.len());
        Ok(actions[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameResult;

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::new();
        let board = Board::from_moves(&[3, 3, 3, 3, 3, 3]).unwrap();
        let legal = board.legal_moves();

        for _ in 0..100 {
            let action = agent.select_move(&board, Player::Red).unwrap();
            assert!(legal.contains(&action), "Action {} is not legal", action);
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::with_seed(1);
        let mut agent2 = RandomAgent::with_seed(2);
        let mut board = Board::new();
        let mut player = Player::Red;

        while board.result() == GameResult::InProgress {
            let action = match player {
                Player::Red => agent1.select_move(&board, player).unwrap(),
                Player::Yellow => agent2.select_move(&board, player).unwrap(),
            };
            board.drop_piece(action, player).unwrap();
            player = player.other();
        }

        assert!(board.result().is_terminal());
    }

    #[test]
    fn test_seeded_agents_agree() {
        let board = Board::new();
        let mut a = RandomAgent::with_seed(9);
        let mut b = RandomAgent::with_seed(9);
        for _ in 0..20 {
            assert_eq!(
                a.select_move(&board, Player::Red).unwrap(),
                b.select_move(&board, Player::Red).unwrap()
            );
        }
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
