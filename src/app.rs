use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/habits", get(handlers::list_habits))
        .route("/api/habits", post(handlers::create_habit))
        .route("/api/habits/:id", get(handlers::get_habit))
        .route("/api/habits/:id", patch(handlers::update_habit))
        .route("/api/habits/:id", delete(handlers::delete_habit))
        .route("/api/completions", get(handlers::list_completions))
        .route("/api/completions", post(handlers::create_completion))
        .route(
            "/api/completions/habit/:habit_id",
            get(handlers::completions_by_habit),
        )
        .route(
            "/api/completions/date/:date",
            get(handlers::completions_by_date),
        )
        .route(
            "/api/completions/:habit_id/:date",
            delete(handlers::delete_completion),
        )
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/today", get(handlers::get_today))
        .with_state(state)
}
