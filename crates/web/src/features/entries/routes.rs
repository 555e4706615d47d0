use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{
    approve_entry, create_entry, get_entry, list_entries, reject_entry, withdraw_entry,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/entries/:id/approve", post(approve_entry))
        .route("/entries/:id/reject", post(reject_entry))
        .route("/entries/:id/withdraw", post(withdraw_entry))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/editions/:id/entries", get(list_entries))
        .route("/editions/:id/entries", post(create_entry))
        .route("/entries/:id", get(get_entry))
        .merge(protected)
}
