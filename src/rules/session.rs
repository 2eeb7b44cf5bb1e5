use log::info;
use rand::Rng;
use uuid::Uuid;

use super::random_fruit;
use crate::gridsnake::{
    models::{GameState, Snake},
    types::Board,
};

pub const START: Snake = Snake {
    x:     0,
    y:     0,
    vel_x: 1,
    vel_y: 0,
};

/// Builds a fresh session: score zero, the snake in the top-left corner
/// heading right, and a random fruit.
///
/// The board must have positive dimensions; the API layer rejects anything
/// else before we get here.
pub fn create_session<R: Rng + ?Sized>(board: Board, rng: &mut R) -> GameState {
    let state = GameState {
        game_id: Uuid::new_v4().to_string(),
        width:   board.width,
        height:  board.height,
        score:   0,
        fruit:   random_fruit(board, rng),
        snake:   START,
    };

    info!(
        "new game {} on a {}x{} board, fruit at {}",
        state.game_id, state.width, state.height, state.fruit
    );

    state
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::gridsnake::types::Position;

    #[test]
    fn fruit_always_lands_on_the_board() {
        let mut rng = StdRng::seed_from_u64(7);
        for width in 1..=12 {
            for height in 1..=12 {
                let board = Board { width, height };
                for _ in 0..20 {
                    let state = create_session(board, &mut rng);
                    assert!(board.contains(state.fruit), "{}", state.fruit);
                }
            }
        }
    }

    #[test]
    fn sessions_start_from_the_corner() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = create_session(
            Board {
                width:  9,
                height: 3,
            },
            &mut rng,
        );

        assert_eq!(state.score, 0);
        assert_eq!(state.width, 9);
        assert_eq!(state.height, 3);
        assert_eq!(state.snake, START);
        assert_eq!(state.snake.head(), Position { x: 0, y: 0 });
    }

    #[test]
    fn single_cell_board_puts_fruit_under_the_snake() {
        let state = create_session(
            Board {
                width:  1,
                height: 1,
            },
            &mut rand::thread_rng(),
        );
        assert_eq!(state.fruit, state.snake.head());
    }

    #[test]
    fn game_ids_are_unique() {
        let board = Board {
            width:  4,
            height: 4,
        };
        let mut rng = rand::thread_rng();
        let ids: HashSet<_> = (0..500)
            .map(|_| create_session(board, &mut rng).game_id)
            .collect();
        assert_eq!(ids.len(), 500);
    }
}
