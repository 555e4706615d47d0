use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    add_match_event, create_match, delete_match, generate_matches, get_match, list_match_events,
    list_matches, update_match,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/editions/:id/matches", post(create_match))
        .route("/editions/:id/matches/generate", post(generate_matches))
        .route("/matches/:id", put(update_match))
        .route("/matches/:id", delete(delete_match))
        .route("/matches/:id/events", post(add_match_event))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/editions/:id/matches", get(list_matches))
        .route("/matches/:id", get(get_match))
        .route("/matches/:id/events", get(list_match_events))
        .merge(protected)
}
