use axum::{routing::get, Router};

use crate::handlers;

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/", get(handlers::a001_production_item::root))
        .route("/health", get(handlers::a001_production_item::health))
        // A001 Production items
        .route(
            "/api/production-items",
            get(handlers::a001_production_item::list),
        )
        .route(
            "/api/production-items/:id",
            get(handlers::a001_production_item::get_by_id)
                .delete(handlers::a001_production_item::delete),
        )
}
