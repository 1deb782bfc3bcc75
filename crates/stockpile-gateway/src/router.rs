//! Axum router wiring.
//!
//! - `/items/` (and `/items`): create
//! - `/items/:name`: read, update, delete
//! - `metrics.path` plus the request-tracking layer, when metrics are enabled

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, handlers, obs};

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/items/", post(handlers::create_item))
        .route("/items", post(handlers::create_item))
        .route(
            "/items/:name",
            get(handlers::read_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        );

    if let Some(metrics) = state.metrics() {
        router = router
            .route(&state.cfg().metrics.path, get(handlers::scrape))
            .layer(middleware::from_fn_with_state(
                metrics,
                obs::middleware::track_requests,
            ));
    }

    router.with_state(state)
}
