use itertools::Itertools;

use crate::gridsnake::{models::GameState, types::Tick};

const NEIGHBOURS: [Tick; 4] = [Tick::RIGHT, Tick::DOWN, Tick::LEFT, Tick::UP];

/// Plans a batch of ticks that walks the stored head onto the fruit, x axis
/// first. The path stays inside the box spanned by the head and the fruit so
/// it never leaves the board or meets the fruit early.
///
/// A fruit sitting on the head needs a step out and back. Returns `None` if
/// that is impossible (a 1x1 board) or either end is off the board.
#[must_use]
pub fn plan_route(state: &GameState) -> Option<Vec<Tick>> {
    let board = state.board();
    let head = state.snake.head();
    let fruit = state.fruit;

    if !board.contains(head) || !board.contains(fruit) {
        return None;
    }

    if head == fruit {
        let out = NEIGHBOURS.into_iter().find(|tick| {
            head.step(*tick).is_some_and(|p| board.contains(p))
        })?;
        return Some(vec![out, out.opposite()]);
    }

    let dx = fruit.x - head.x;
    let dy = fruit.y - head.y;
    let horizontal = if dx < 0 { Tick::LEFT } else { Tick::RIGHT };
    let vertical = if dy < 0 { Tick::UP } else { Tick::DOWN };

    Some(
        itertools::repeat_n(horizontal, usize::try_from(dx.unsigned_abs()).ok()?)
            .chain(itertools::repeat_n(
                vertical,
                usize::try_from(dy.unsigned_abs()).ok()?,
            ))
            .collect_vec(),
    )
}
