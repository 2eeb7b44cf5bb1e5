use std::fmt::Display;

use futures_util::{pin_mut, Stream, StreamExt};
use log::warn;
use warp::{
    hyper::body::{Buf, Bytes},
    Filter,
    Rejection,
};

use super::RequestError;

/// Buffers a request body of at most `limit` bytes. A declared
/// `Content-Length` over the limit is refused up front; chunked bodies are
/// counted as they arrive.
pub fn capped(
    limit: u64,
) -> impl Filter<Extract = (Bytes,), Error = Rejection> + Clone {
    warp::header::optional::<u64>("content-length")
        .and_then(move |declared: Option<u64>| async move {
            match declared {
                Some(length) if length > limit => {
                    Err(warp::reject::custom(RequestError::BodyTooLarge(limit)))
                }
                _ => Ok(()),
            }
        })
        .untuple_one()
        .and(warp::body::stream())
        .and_then(move |stream| read_capped(stream, limit))
}

async fn read_capped<S, B, E>(
    stream: S,
    limit: u64,
) -> Result<Bytes, Rejection>
where
    S: Stream<Item = Result<B, E>>,
    B: Buf,
    E: Display,
{
    pin_mut!(stream);

    let mut body = Vec::new();
    while let Some(chunk) = stream.next().await {
        let mut chunk = chunk.map_err(|e| {
            warn!("failed reading request body: {e}");
            warp::reject::custom(RequestError::MalformedBatch(e.to_string()))
        })?;

        if (body.len() + chunk.remaining()) as u64 > limit {
            return Err(warp::reject::custom(RequestError::BodyTooLarge(limit)));
        }

        while chunk.has_remaining() {
            let read = {
                let part = chunk.chunk();
                body.extend_from_slice(part);
                part.len()
            };
            chunk.advance(read);
        }
    }

    Ok(Bytes::from(body))
}
