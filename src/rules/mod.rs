pub mod session;
pub mod validator;

use rand::Rng;
pub use session::create_session;
pub use validator::{validate_moves, Outcome};

use crate::gridsnake::{
    models::GameState,
    types::{Board, Position},
};

/// Draws a fruit position with independent uniform draws per axis. The
/// snake's head and the previous fruit are not excluded.
///
/// # Panics
///
/// Panics if the board has no cells.
pub fn random_fruit<R: Rng + ?Sized>(board: Board, rng: &mut R) -> Position {
    let x = rng.gen_range(0..board.width);
    let y = rng.gen_range(0..board.height);
    Position { x, y }
}

impl GameState {
    /// Applies a capture: swaps in the new fruit and bumps the score. The
    /// stored snake is left exactly as the client sent it.
    pub fn capture(&mut self, fruit: Position) {
        self.fruit = fruit;
        self.score = self.score.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::rules::session::START;

    const WIDTH: i64 = 5;
    const HEIGHT: i64 = 4;
    const DRAWS: usize = 40_000;

    #[test]
    fn fruit_axes_are_uniform_and_independent() {
        let board = Board {
            width:  WIDTH,
            height: HEIGHT,
        };
        let mut rng = StdRng::seed_from_u64(0x5eed);

        let mut cells = [[0_usize; WIDTH as usize]; HEIGHT as usize];
        for _ in 0..DRAWS {
            let fruit = random_fruit(board, &mut rng);
            assert!(board.contains(fruit));
            cells[fruit.y as usize][fruit.x as usize] += 1;
        }

        let column_totals: Vec<usize> = (0..WIDTH as usize)
            .map(|x| cells.iter().map(|row| row[x]).sum())
            .collect();
        let row_totals: Vec<usize> =
            cells.iter().map(|row| row.iter().sum()).collect();

        let within = |observed: usize, expected: f64, tolerance: f64| {
            (observed as f64 - expected).abs() / expected < tolerance
        };

        for total in &column_totals {
            assert!(within(*total, DRAWS as f64 / WIDTH as f64, 0.05), "{total}");
        }
        for total in &row_totals {
            assert!(within(*total, DRAWS as f64 / HEIGHT as f64, 0.05), "{total}");
        }

        // joint frequency should match the product of the marginals
        for (y, row) in cells.iter().enumerate() {
            for (x, count) in row.iter().enumerate() {
                let expected = column_totals[x] as f64 * row_totals[y] as f64
                    / DRAWS as f64;
                assert!(within(*count, expected, 0.1), "({x}, {y}): {count}");
            }
        }
    }

    #[test]
    fn capture_bumps_score_and_keeps_the_snake() {
        let mut state = GameState {
            game_id: "g".to_owned(),
            width:   5,
            height:  5,
            score:   3,
            fruit:   Position { x: 3, y: 0 },
            snake:   START,
        };

        state.capture(Position { x: 1, y: 4 });

        assert_eq!(state.score, 4);
        assert_eq!(state.fruit, Position { x: 1, y: 4 });
        assert_eq!(state.snake, START);
    }
}
