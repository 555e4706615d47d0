use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    create_edition, delete_edition, get_edition, list_editions, publish_edition, update_edition,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/competitions/:slug/editions", post(create_edition))
        .route("/editions/:id", put(update_edition))
        .route("/editions/:id", delete(delete_edition))
        .route("/editions/:id/publish", post(publish_edition))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/competitions/:slug/editions", get(list_editions))
        .route("/editions/:id", get(get_edition))
        .merge(protected)
}
