use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/exercises",
            get(handlers::list_exercises).post(handlers::create_exercise),
        )
        .route(
            "/api/exercises/:id",
            get(handlers::get_exercise)
                .patch(handlers::update_exercise)
                .delete(handlers::delete_exercise),
        )
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/stats/chart", get(handlers::get_chart))
        .route("/api/user", get(handlers::get_user))
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/library", get(handlers::list_library))
        .route("/api/calories/estimate", get(handlers::estimate_calories))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
