use log::debug;
use rand::Rng;

use super::random_fruit;
use crate::gridsnake::{
    models::GameState,
    types::{Position, Tick},
};

/// What happened when a batch of ticks was replayed. `tick` is the index of
/// the tick that ended the replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    OutOfBounds { tick: usize, at: Option<Position> },
    FruitCaptured { tick: usize, fruit: Position },
    NoCapture,
}

/// Replays `ticks` from the stored snake head.
///
/// Each tick replaces the velocity outright, so the snake's stored velocity
/// is never used. Per tick, leaving the board is checked before reaching the
/// fruit, and the first tick to trigger either one decides the outcome. A
/// capture draws a brand new fruit from `rng`.
///
/// `at` is `None` when the step overflowed the coordinate range.
pub fn validate_moves<R: Rng + ?Sized>(
    state: &GameState,
    ticks: &[Tick],
    rng: &mut R,
) -> Outcome {
    let board = state.board();
    let mut head = state.snake.head();

    for (index, tick) in ticks.iter().enumerate() {
        let next = head.step(*tick);
        match next {
            Some(position) if board.contains(position) => head = position,
            _ => {
                debug!(
                    "game {}: out of bounds on tick {index} from {head}",
                    state.game_id
                );
                return Outcome::OutOfBounds {
                    tick: index,
                    at:   next,
                };
            }
        }

        if head == state.fruit {
            let fruit = random_fruit(board, rng);
            debug!(
                "game {}: fruit at {head} captured on tick {index}, next fruit \
                 at {fruit}",
                state.game_id
            );
            return Outcome::FruitCaptured { tick: index, fruit };
        }
    }

    debug!(
        "game {}: {} ticks replayed without reaching {}",
        state.game_id,
        ticks.len(),
        state.fruit
    );
    Outcome::NoCapture
}
