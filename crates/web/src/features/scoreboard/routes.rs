use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{get_scoreboard, trigger_highlight};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/editions/:id/highlight", post(trigger_highlight))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route(
            "/scoreboard/:competition_slug/:edition_slug",
            get(get_scoreboard),
        )
        .merge(protected)
}
