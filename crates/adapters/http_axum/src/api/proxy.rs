//! Same-origin proxy for the recorder backend's endpoints.

use axum::body::Body;
use axum::extract::State;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::error::ProxyError;
use crate::state::AppState;

/// Forward the request path (and query) to the backend and stream the answer
/// back, keeping status, `content-type`, and `cache-control`.
pub async fn forward(State(state): State<AppState>, uri: Uri) -> Result<Response, ProxyError> {
    let Some(upstream) = state.upstream.as_ref() else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let path_and_query = uri
        .path_and_query()
        .map_or_else(|| uri.path(), |pq| pq.as_str());
    let streaming = uri.path().starts_with("/live/");
    let upstream_response = upstream.get(path_and_query, streaming).await?;

    let mut builder = Response::builder().status(upstream_response.status());
    for name in [CONTENT_TYPE, CACHE_CONTROL] {
        if let Some(value) = upstream_response.headers().get(&name) {
            builder = builder.header(name, value.clone());
        }
    }
    let response = builder.body(Body::from_stream(upstream_response.bytes_stream()))?;
    Ok(response)
}
