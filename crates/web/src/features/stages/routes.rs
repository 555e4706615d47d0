use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    create_group, create_stage, delete_group, delete_stage, list_groups, list_stages,
    reorder_stages, update_group, update_stage,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/editions/:id/stages", post(create_stage))
        .route("/editions/:id/stages/reorder", post(reorder_stages))
        .route("/stages/:id", put(update_stage))
        .route("/stages/:id", delete(delete_stage))
        .route("/stages/:id/groups", post(create_group))
        .route("/groups/:id", put(update_group))
        .route("/groups/:id", delete(delete_group))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/editions/:id/stages", get(list_stages))
        .route("/stages/:id/groups", get(list_groups))
        .merge(protected)
}
