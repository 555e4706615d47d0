use axum::Router;

use crate::middleware::auth::ApiKeys;
use crate::state::AppState;

pub mod competitions;
pub mod editions;
pub mod entries;
pub mod matches;
pub mod scoreboard;
pub mod stages;

/// Combined API surface, mounted under `/api` by main.
pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    Router::new()
        .merge(competitions::routes(api_keys.clone()))
        .merge(editions::routes(api_keys.clone()))
        .merge(entries::routes(api_keys.clone()))
        .merge(stages::routes(api_keys.clone()))
        .merge(matches::routes(api_keys.clone()))
        .merge(scoreboard::routes(api_keys))
}
