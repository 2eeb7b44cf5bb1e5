mod body;
mod rejection;

use log::warn;
pub use rejection::{handle_rejection, RequestError};
use warp::{
    http::{Method, StatusCode},
    hyper::body::Bytes,
    reply::{Json, WithStatus},
    Filter,
    Rejection,
    Reply,
};

use crate::{
    config::Config,
    gridsnake::models::{ErrorBody, IncomingBatch, NewGame, NewGameQuery},
    rules::{create_session, validate_moves, Outcome},
};

const NAME: &str = env!("CARGO_PKG_NAME");

pub const INVALID_REQUEST: &str = "Invalid request";
pub const INVALID_METHOD: &str = "Invalid method";
pub const NOT_FOUND: &str = "Not found";
pub const INTERNAL_ERROR: &str = "Internal Server error";
pub const GAME_OVER: &str = "Game over!! Snake out of bounds!!";
pub const FRUIT_NOT_FOUND: &str = "Fruit not found!!";

/// `GET /new` and `POST /validate`, with CORS, access logging and JSON error
/// bodies for every rejection.
pub fn routes(
    config: &Config,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let cors = warp::cors()
        .allow_method(Method::GET)
        .allow_method(Method::POST)
        .allow_header("content-type")
        .allow_any_origin();

    let logging = warp::log(NAME);

    let new_game = warp::path("new")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<NewGameQuery>())
        .and_then(handle_new_game);

    let validate = warp::path("validate")
        .and(warp::path::end())
        .and(warp::post())
        .and(body::capped(config.max_body_bytes))
        .and_then(handle_validate);

    new_game
        .or(validate)
        .recover(handle_rejection)
        .with(cors)
        .with(logging)
}

pub(crate) fn error_reply(
    message: &str,
    status: StatusCode,
) -> WithStatus<Json> {
    warp::reply::with_status(
        warp::reply::json(&ErrorBody::new(message)),
        status,
    )
}

async fn handle_new_game(query: NewGameQuery) -> Result<impl Reply, Rejection> {
    let board = query.board().map_err(|param| {
        warn!("refusing to start a game: bad {param} in {query:?}");
        warp::reject::custom(RequestError::InvalidDimensions(param.to_owned()))
    })?;

    let state = create_session(board, &mut rand::thread_rng());

    Ok(warp::reply::json(&NewGame { state }))
}

async fn handle_validate(body: Bytes) -> Result<impl Reply, Rejection> {
    let malformed = |e: serde_json::Error| {
        warn!("refusing to validate a malformed batch: {e}");
        warp::reject::custom(RequestError::MalformedBatch(e.to_string()))
    };

    let batch: IncomingBatch = serde_json::from_slice(&body).map_err(malformed)?;
    let mut state = batch.game_state().map_err(malformed)?;

    let outcome = validate_moves(&state, &batch.ticks, &mut rand::thread_rng());

    Ok(match outcome {
        Outcome::OutOfBounds { .. } => {
            error_reply(GAME_OVER, StatusCode::IM_A_TEAPOT)
        }
        Outcome::NoCapture => error_reply(FRUIT_NOT_FOUND, StatusCode::NOT_FOUND),
        Outcome::FruitCaptured { fruit, .. } => {
            state.capture(fruit);
            warp::reply::with_status(
                warp::reply::json(&batch.into_captured(&state)),
                StatusCode::OK,
            )
        }
    })
}
