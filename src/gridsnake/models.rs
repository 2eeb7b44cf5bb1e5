use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::gridsnake::types::{Board, Position, Tick};

/// The snake's head and its last known velocity. There is no body.
///
/// Replays never read the velocity, so clients may leave it out.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Snake {
    pub x:     i64,
    pub y:     i64,
    #[serde(default)]
    pub vel_x: i64,
    #[serde(default)]
    pub vel_y: i64,
}

impl Snake {
    #[must_use]
    pub const fn head(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    #[serde(default)]
    pub game_id: String,
    pub width:   i64,
    pub height:  i64,
    #[serde(default)]
    pub score:   u64,
    pub fruit:   Position,
    pub snake:   Snake,
}

impl GameState {
    #[must_use]
    pub const fn board(&self) -> Board {
        Board {
            width:  self.width,
            height: self.height,
        }
    }
}

/// Reply body for `GET /new`.
#[derive(Serialize, Deserialize, Debug)]
pub struct NewGame {
    pub state: GameState,
}

/// Query string for `GET /new`. Values stay raw until
/// [`NewGameQuery::board`] checks them.
#[derive(Deserialize, Debug, Default)]
pub struct NewGameQuery {
    pub width:  Option<String>,
    pub height: Option<String>,
}

impl NewGameQuery {
    /// Both dimensions must be present and parse as integers greater than
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns the name of the first offending parameter.
    pub fn board(&self) -> Result<Board, &'static str> {
        Ok(Board {
            width:  parse_dimension(self.width.as_deref()).ok_or("width")?,
            height: parse_dimension(self.height.as_deref()).ok_or("height")?,
        })
    }
}

fn parse_dimension(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse::<i64>().ok().filter(|v| *v > 0)
}

/// Request body for `POST /validate`.
#[derive(Serialize, Deserialize, Debug)]
pub struct ValidateRequest {
    pub state: GameState,
    pub ticks: Vec<Tick>,
}

/// `POST /validate` as the referee reads it. The state is kept as the
/// client's own JSON object so a capture can hand it back with nothing but
/// the fruit and score touched.
#[derive(Deserialize, Debug)]
pub struct IncomingBatch {
    pub state: Map<String, Value>,
    pub ticks: Vec<Tick>,
}

impl IncomingBatch {
    /// # Errors
    ///
    /// Fails if the fields the rules read are missing or mistyped.
    pub fn game_state(&self) -> serde_json::Result<GameState> {
        serde_json::from_value(Value::Object(self.state.clone()))
    }

    /// The client's state with the capture written into it.
    #[must_use]
    pub fn into_captured(mut self, captured: &GameState) -> Map<String, Value> {
        self.state.insert(
            "fruit".to_owned(),
            json!({ "x": captured.fruit.x, "y": captured.fruit.y }),
        );
        self.state
            .insert("score".to_owned(), Value::from(captured.score));
        self.state
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
