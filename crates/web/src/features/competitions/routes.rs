use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    create_competition, delete_competition, get_competition, list_competitions,
    update_competition,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/competitions", post(create_competition))
        .route("/competitions/:slug", put(update_competition))
        .route("/competitions/:slug", delete(delete_competition))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/competitions", get(list_competitions))
        .route("/competitions/:slug", get(get_competition))
        .merge(protected)
}
