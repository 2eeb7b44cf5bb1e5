use std::convert::Infallible;

use log::{error, warn};
use thiserror::Error;
use warp::{
    http::StatusCode,
    reject::{InvalidHeader, InvalidQuery, MethodNotAllowed},
    Rejection,
    Reply,
};

use super::{
    error_reply,
    INTERNAL_ERROR,
    INVALID_METHOD,
    INVALID_REQUEST,
    NOT_FOUND,
};

/// Requests refused before they reach the game rules.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid board dimensions: {0} must be an integer above zero")]
    InvalidDimensions(String),
    #[error("malformed move batch: {0}")]
    MalformedBatch(String),
    #[error("request body larger than {0} bytes")]
    BodyTooLarge(u64),
}

impl warp::reject::Reject for RequestError {}

/// Turns any rejection into a JSON `{"error": ...}` body.
///
/// # Errors
///
/// Never fails; every rejection gets a reply.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (message, status) = if err.is_not_found() {
        (NOT_FOUND, StatusCode::NOT_FOUND)
    } else if let Some(e) = err.find::<RequestError>() {
        warn!("{e}");
        (INVALID_REQUEST, StatusCode::BAD_REQUEST)
    } else if err.find::<InvalidQuery>().is_some()
        || err.find::<InvalidHeader>().is_some()
    {
        warn!("bad request: {err:?}");
        (INVALID_REQUEST, StatusCode::BAD_REQUEST)
    } else if err.find::<MethodNotAllowed>().is_some() {
        (INVALID_METHOD, StatusCode::METHOD_NOT_ALLOWED)
    } else {
        error!("unhandled rejection: {err:?}");
        (INTERNAL_ERROR, StatusCode::INTERNAL_SERVER_ERROR)
    };

    Ok(error_reply(message, status))
}
