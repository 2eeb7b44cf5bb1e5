use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Position {
    /// Moves one tick along the given velocity.
    ///
    /// Returns `None` if either axis overflows, which can only happen far
    /// outside any board.
    #[must_use]
    pub fn step(&self, tick: Tick) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(tick.vel_x)?,
            y: self.y.checked_add(tick.vel_y)?,
        })
    }
}

/// One discrete step's velocity. Components are expected to be -1, 0 or 1
/// but nothing enforces it.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct Tick {
    pub vel_x: i64,
    pub vel_y: i64,
}

impl Tick {
    pub const DOWN: Self = Self { vel_x: 0, vel_y: 1 };
    pub const LEFT: Self = Self { vel_x: -1, vel_y: 0 };
    pub const RIGHT: Self = Self { vel_x: 1, vel_y: 0 };
    pub const UP: Self = Self { vel_x: 0, vel_y: -1 };

    #[must_use]
    pub const fn opposite(self) -> Self {
        Self {
            vel_x: -self.vel_x,
            vel_y: -self.vel_y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub width:  i64,
    pub height: i64,
}

impl Board {
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width
            && position.y < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_contains_its_corners_only() {
        let board = Board {
            width:  5,
            height: 4,
        };

        assert!(board.contains(Position { x: 0, y: 0 }));
        assert!(board.contains(Position { x: 4, y: 3 }));
        assert!(!board.contains(Position { x: 5, y: 3 }));
        assert!(!board.contains(Position { x: 4, y: 4 }));
        assert!(!board.contains(Position { x: -1, y: 0 }));
        assert!(!board.contains(Position { x: 0, y: -1 }));
    }

    #[test]
    fn step_overflow_is_none() {
        let edge = Position { x: i64::MAX, y: 0 };
        assert_eq!(edge.step(Tick::RIGHT), None);
        assert_eq!(
            edge.step(Tick::LEFT),
            Some(Position {
                x: i64::MAX - 1,
                y: 0,
            })
        );
    }

    #[test]
    fn ticks_use_camel_case_on_the_wire() {
        let tick: Tick =
            serde_json::from_str(r#"{"velX": -1, "velY": 0}"#).unwrap();
        assert_eq!(tick, Tick::LEFT);
        assert_eq!(
            serde_json::to_string(&Tick::DOWN).unwrap(),
            r#"{"velX":0,"velY":1}"#
        );
    }
}
