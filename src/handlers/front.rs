//! The front-controller handler.

use axum::{extract::State, http::Uri, response::Html};

use crate::dispatch::{self, RequestContext};
use crate::state::AppState;

/// Routes every request under the base URI through the dispatcher.
///
/// # Endpoint
///
/// `GET <BASE_URI>/*` (mounted as the nested router's fallback)
///
/// # Output contract
///
/// The response is always `200 OK`: either the body the dispatcher produced,
/// byte-for-byte, or the `Exception => <message>` diagnostic for a dispatch
/// fault. Success and failure share the same channel with no status
/// distinction.
pub async fn front_controller(State(state): State<AppState>, uri: Uri) -> Html<String> {
    let request = RequestContext::new(uri.path());
    let body = dispatch::run(state.dispatcher.as_ref(), request).await;
    Html(body)
}
